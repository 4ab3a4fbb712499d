use std::collections::HashSet;

use crate::models::Observation;

/// Smallest and largest year present in a dataset. Bounds the year sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl YearBounds {
    pub fn clamp(&self, year: i32) -> i32 {
        year.clamp(self.min, self.max)
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

/// The loaded observation table. Read-only once built.
#[derive(Debug, Clone)]
pub struct ObservationDataset {
    observations: Vec<Observation>,
    stations: Vec<String>,
    year_bounds: YearBounds,
}

impl ObservationDataset {
    /// Returns `None` for an empty table, which has no year bounds.
    pub fn new(observations: Vec<Observation>) -> Option<Self> {
        let first = observations.first()?;
        let mut year_bounds = YearBounds {
            min: first.year,
            max: first.year,
        };

        let mut stations: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for obs in &observations {
            year_bounds.min = year_bounds.min.min(obs.year);
            year_bounds.max = year_bounds.max.max(obs.year);

            if seen.insert(obs.station.as_str()) {
                stations.push(obs.station.clone());
            }
        }

        Some(Self {
            observations,
            stations,
            year_bounds,
        })
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Distinct stations in order of first appearance.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    pub fn year_bounds(&self) -> YearBounds {
        self.year_bounds
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn station_index(&self, station: &str) -> Option<usize> {
        self.stations.iter().position(|s| s == station)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_is_rejected() {
        assert!(ObservationDataset::new(Vec::new()).is_none());
    }

    #[test]
    fn test_stations_keep_first_appearance_order() {
        let dataset = ObservationDataset::new(vec![
            Observation::new("Wanliu", 2014),
            Observation::new("Changping", 2013),
            Observation::new("Wanliu", 2017),
            Observation::new("Dingling", 2016),
        ])
        .unwrap();

        assert_eq!(dataset.stations(), ["Wanliu", "Changping", "Dingling"]);
        assert_eq!(dataset.year_bounds(), YearBounds { min: 2013, max: 2017 });
        assert_eq!(dataset.station_index("Dingling"), Some(2));
        assert_eq!(dataset.len(), 4);
    }

    #[test]
    fn test_year_bounds_clamp() {
        let bounds = YearBounds {
            min: 2013,
            max: 2017,
        };
        assert_eq!(bounds.clamp(2010), 2013);
        assert_eq!(bounds.clamp(2015), 2015);
        assert_eq!(bounds.clamp(2020), 2017);
        assert!(bounds.contains(2017));
        assert!(!bounds.contains(2018));
    }
}
