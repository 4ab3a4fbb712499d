use crate::models::{Measurement, ObservationDataset, YearBounds};

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub total_rows: usize,
    pub year_bounds: YearBounds,
    pub station_rows: Vec<(String, usize)>,
    pub missing_values: Vec<(Measurement, usize)>,
}

impl DatasetSummary {
    pub fn from_dataset(dataset: &ObservationDataset) -> Self {
        let mut station_rows: Vec<(String, usize)> =
            dataset.stations().iter().map(|s| (s.clone(), 0)).collect();
        let mut missing_values: Vec<(Measurement, usize)> =
            Measurement::ALL.iter().map(|m| (*m, 0)).collect();

        for obs in dataset.observations() {
            if let Some(index) = dataset.station_index(&obs.station) {
                station_rows[index].1 += 1;
            }
            for (measurement, count) in missing_values.iter_mut() {
                if obs.is_missing(*measurement) {
                    *count += 1;
                }
            }
        }

        Self {
            total_rows: dataset.len(),
            year_bounds: dataset.year_bounds(),
            station_rows,
            missing_values,
        }
    }

    pub fn missing_percentage(&self, measurement: Measurement) -> f64 {
        let missing = self
            .missing_values
            .iter()
            .find(|(m, _)| *m == measurement)
            .map(|(_, c)| *c)
            .unwrap_or(0);
        if self.total_rows == 0 {
            0.0
        } else {
            (missing as f64 / self.total_rows as f64) * 100.0
        }
    }

    pub fn summary(&self) -> String {
        let stations = self
            .station_rows
            .iter()
            .map(|(name, rows)| format!("- {}: {} rows", name, rows))
            .collect::<Vec<_>>()
            .join("\n");

        let missing = self
            .missing_values
            .iter()
            .map(|(m, count)| {
                format!(
                    "- {:<6} {} missing ({:.1}%)",
                    m.name(),
                    count,
                    self.missing_percentage(*m)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Records: {} total\n\
            Years: {} to {}\n\
            Stations: {} stations\n\
            {}\n\n\
            Missing Values:\n\
            {}",
            self.total_rows,
            self.year_bounds.min,
            self.year_bounds.max,
            self.station_rows.len(),
            stations,
            missing
        )
    }
}
