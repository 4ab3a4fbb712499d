use crate::analyzers::statistics::MeanAccumulator;
use crate::error::{AggregateKind, EmptyAggregateWarning};
use crate::models::{ObservationDataset, Pollutant};
use crate::utils::constants::COMPARISON_GRID_COLS;
use tracing::debug;

/// One bar: a station's mean for a pollutant. `mean` is NaN when
/// `sample_count` is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct StationMean {
    pub station: String,
    pub mean: f64,
    pub sample_count: usize,
}

impl StationMean {
    pub fn value(&self) -> Option<f64> {
        if self.sample_count == 0 {
            None
        } else {
            Some(self.mean)
        }
    }
}

/// One panel of the comparison grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonPanel {
    pub pollutant: Pollutant,
    pub bars: Vec<StationMean>,
}

impl ComparisonPanel {
    pub fn max_value(&self) -> Option<f64> {
        self.finite_values()
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }

    pub fn min_value(&self) -> Option<f64> {
        self.finite_values()
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.min(v))))
    }

    fn finite_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.bars
            .iter()
            .filter_map(StationMean::value)
            .filter(|v| v.is_finite())
    }
}

/// `(row, col)` of panel `index` in the 2x3 grid.
pub fn grid_position(index: usize) -> (usize, usize) {
    (index / COMPARISON_GRID_COLS, index % COMPARISON_GRID_COLS)
}

/// Station means for every pollutant over an inclusive year range.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeComparison {
    pub start_year: i32,
    pub end_year: i32,
    pub panels: Vec<ComparisonPanel>,
}

impl RangeComparison {
    pub fn mean(&self, pollutant: Pollutant, station: &str) -> Option<f64> {
        self.panels
            .iter()
            .find(|p| p.pollutant == pollutant)?
            .bars
            .iter()
            .find(|b| b.station == station)?
            .value()
    }

    pub fn panel(&self, pollutant: Pollutant) -> Option<&ComparisonPanel> {
        self.panels.iter().find(|p| p.pollutant == pollutant)
    }

    /// True when no value in the range contributed to any bar.
    pub fn is_empty(&self) -> bool {
        self.panels
            .iter()
            .all(|p| p.bars.iter().all(|b| b.sample_count == 0))
    }

    pub fn warnings(&self) -> Vec<EmptyAggregateWarning> {
        if self.start_year > self.end_year {
            return vec![EmptyAggregateWarning::new(
                AggregateKind::RangeComparison,
                format!(
                    "start year {} is after end year {}, no rows selected",
                    self.start_year, self.end_year
                ),
            )];
        }

        self.panels
            .iter()
            .flat_map(|panel| {
                panel
                    .bars
                    .iter()
                    .filter(|b| b.sample_count == 0)
                    .map(move |b| {
                        EmptyAggregateWarning::new(
                            AggregateKind::RangeComparison,
                            format!(
                                "no {} values for station {} in {}-{}",
                                panel.pollutant, b.station, self.start_year, self.end_year
                            ),
                        )
                    })
            })
            .collect()
    }
}

/// Mean of each pollutant per station for rows with `start_year <= year <= end_year`.
///
/// An inverted range selects nothing; every bar is then undefined.
pub fn compare_stations(
    dataset: &ObservationDataset,
    start_year: i32,
    end_year: i32,
) -> RangeComparison {
    let stations = dataset.stations();
    let mut accumulators = vec![[MeanAccumulator::new(); Pollutant::ALL.len()]; stations.len()];

    let mut selected_rows = 0usize;
    for obs in dataset.observations() {
        if obs.year < start_year || obs.year > end_year {
            continue;
        }
        let Some(index) = dataset.station_index(&obs.station) else {
            continue;
        };
        selected_rows += 1;
        for pollutant in Pollutant::ALL {
            accumulators[index][pollutant.index()].push(obs.pollutant(pollutant));
        }
    }

    let panels = Pollutant::ALL
        .iter()
        .map(|&pollutant| ComparisonPanel {
            pollutant,
            bars: stations
                .iter()
                .zip(&accumulators)
                .map(|(station, accs)| {
                    let acc = accs[pollutant.index()];
                    StationMean {
                        station: station.clone(),
                        mean: acc.mean(),
                        sample_count: acc.count(),
                    }
                })
                .collect(),
        })
        .collect();

    debug!(
        "Range comparison {}-{}: {} rows selected",
        start_year, end_year, selected_rows
    );

    RangeComparison {
        start_year,
        end_year,
        panels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Observation;

    fn obs(station: &str, year: i32, pm25: f64) -> Observation {
        Observation::new(station, year).with_value(Pollutant::Pm25, pm25)
    }

    #[test]
    fn test_mean_over_inclusive_range() {
        let dataset = ObservationDataset::new(vec![obs("A", 2015, 10.0), obs("A", 2016, 20.0)]).unwrap();

        let comparison = compare_stations(&dataset, 2015, 2016);

        assert_eq!(comparison.mean(Pollutant::Pm25, "A"), Some(15.0));
    }

    #[test]
    fn test_rows_outside_range_are_excluded() {
        let dataset = ObservationDataset::new(vec![
            obs("A", 2014, 1000.0),
            obs("A", 2015, 10.0),
            obs("B", 2015, 4.0),
            obs("B", 2017, 8.0),
            obs("B", 2018, 1000.0),
        ])
        .unwrap();

        let comparison = compare_stations(&dataset, 2015, 2017);

        assert_eq!(comparison.mean(Pollutant::Pm25, "A"), Some(10.0));
        assert_eq!(comparison.mean(Pollutant::Pm25, "B"), Some(6.0));
        let panel = comparison.panel(Pollutant::Pm25).unwrap();
        assert_eq!(panel.max_value(), Some(10.0));
        assert_eq!(panel.min_value(), Some(6.0));
    }

    #[test]
    fn test_inverted_range_is_empty_not_an_error() {
        let dataset = ObservationDataset::new(vec![obs("A", 2015, 10.0), obs("B", 2016, 20.0)]).unwrap();

        let comparison = compare_stations(&dataset, 2017, 2015);

        assert!(comparison.is_empty());
        for panel in &comparison.panels {
            assert_eq!(panel.bars.len(), 2);
            for bar in &panel.bars {
                assert!(bar.mean.is_nan());
                assert_eq!(bar.sample_count, 0);
            }
            assert_eq!(panel.max_value(), None);
        }
        assert_eq!(comparison.warnings().len(), 1);
    }

    #[test]
    fn test_single_row_means_equal_raw_values() {
        let row = Observation::new("Gucheng", 2016)
            .with_value(Pollutant::Pm25, 81.5)
            .with_value(Pollutant::Pm10, 104.0)
            .with_value(Pollutant::So2, 12.0)
            .with_value(Pollutant::No2, 48.25)
            .with_value(Pollutant::Co, 1200.0)
            .with_value(Pollutant::O3, 57.0);
        let dataset = ObservationDataset::new(vec![row.clone()]).unwrap();

        let comparison = compare_stations(&dataset, 2016, 2016);

        for pollutant in Pollutant::ALL {
            assert_eq!(
                comparison.mean(pollutant, "Gucheng"),
                Some(row.pollutant(pollutant))
            );
        }
    }

    #[test]
    fn test_missing_values_do_not_count() {
        let dataset = ObservationDataset::new(vec![
            obs("A", 2015, 10.0),
            obs("A", 2015, f64::NAN),
            obs("B", 2015, f64::NAN),
        ])
        .unwrap();

        let comparison = compare_stations(&dataset, 2015, 2015);
        let panel = comparison.panel(Pollutant::Pm25).unwrap();

        assert_eq!(panel.bars[0].sample_count, 1);
        assert_eq!(panel.bars[0].mean, 10.0);
        assert_eq!(panel.bars[1].value(), None);
        assert!(comparison
            .warnings()
            .iter()
            .any(|w| w.detail == "no PM2.5 values for station B in 2015-2015"));
    }

    #[test]
    fn test_panels_fill_two_by_three_grid() {
        let dataset = ObservationDataset::new(vec![obs("A", 2015, 10.0)]).unwrap();
        let comparison = compare_stations(&dataset, 2015, 2015);

        let positions: Vec<(usize, usize)> = (0..comparison.panels.len()).map(grid_position).collect();
        assert_eq!(
            positions,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }
}
