use crate::analyzers::{
    aggregate_trend, compare_stations, correlation_matrix, CorrelationMatrix, RangeComparison,
    TrendAggregate,
};
use crate::error::EmptyAggregateWarning;
use crate::models::{ControlState, ObservationDataset, ParameterThresholds};
use tracing::{info, warn};

/// Everything the dashboard shows for one set of control values.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardAggregates {
    pub controls: ControlState,
    pub trend: TrendAggregate,
    pub correlation: CorrelationMatrix,
    pub comparison: RangeComparison,
    pub warnings: Vec<EmptyAggregateWarning>,
}

/// Turns control values into aggregates.
///
/// Holds the dataset and threshold table for the life of the process and
/// never mutates them; every call recomputes all three aggregates.
pub struct InteractionHandler<'a> {
    dataset: &'a ObservationDataset,
    thresholds: &'a ParameterThresholds,
}

impl<'a> InteractionHandler<'a> {
    pub fn new(dataset: &'a ObservationDataset, thresholds: &'a ParameterThresholds) -> Self {
        Self {
            dataset,
            thresholds,
        }
    }

    pub fn dataset(&self) -> &ObservationDataset {
        self.dataset
    }

    pub fn thresholds(&self) -> &ParameterThresholds {
        self.thresholds
    }

    pub fn handle(&self, controls: &ControlState) -> DashboardAggregates {
        info!(
            "Computing aggregates for {} ({})",
            controls.parameter,
            controls.year_range_label()
        );

        let trend = aggregate_trend(self.dataset, controls.parameter);
        let correlation = correlation_matrix(self.dataset);
        let comparison = compare_stations(self.dataset, controls.start_year, controls.end_year);

        let mut warnings = trend.warnings();
        warnings.extend(correlation.warnings());
        warnings.extend(comparison.warnings());
        for warning in &warnings {
            warn!("{}", warning);
        }

        DashboardAggregates {
            controls: *controls,
            trend,
            correlation,
            comparison,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Observation, Pollutant, WeatherVariable, PARAMETER_THRESHOLDS};

    fn dataset() -> ObservationDataset {
        ObservationDataset::new(
            (0..6)
                .map(|i| {
                    let station = if i % 2 == 0 { "A" } else { "B" };
                    Observation::new(station, 2013 + i / 2)
                        .with_value(Pollutant::Pm25, 10.0 + i as f64)
                        .with_value(Pollutant::O3, 50.0 - i as f64)
                        .with_value(WeatherVariable::Temp, i as f64)
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_handle_builds_all_three_aggregates() {
        let dataset = dataset();
        let handler = InteractionHandler::new(&dataset, &PARAMETER_THRESHOLDS);
        let controls = ControlState::initial(dataset.year_bounds(), 2013, 2014)
            .with_parameter(Pollutant::O3);

        let aggregates = handler.handle(&controls);

        assert_eq!(aggregates.controls, controls);
        assert_eq!(aggregates.trend.parameter, Pollutant::O3);
        assert_eq!(aggregates.trend.series.len(), 2);
        assert_eq!(aggregates.correlation.size(), 11);
        assert_eq!(aggregates.comparison.start_year, 2013);
        assert_eq!(aggregates.comparison.end_year, 2014);
        // A: rows 0 and 2 -> PM2.5 10 and 12
        assert_eq!(aggregates.comparison.mean(Pollutant::Pm25, "A"), Some(11.0));
    }

    #[test]
    fn test_repeated_interactions_are_identical() {
        let dataset = dataset();
        let handler = InteractionHandler::new(&dataset, &PARAMETER_THRESHOLDS);
        let controls = ControlState::initial(dataset.year_bounds(), 2015, 2017);

        let first = format!("{:?}", handler.handle(&controls));
        let second = format!("{:?}", handler.handle(&controls));

        assert_eq!(first, second);
    }

    #[test]
    fn test_inverted_years_produce_warnings_not_errors() {
        let dataset = dataset();
        let handler = InteractionHandler::new(&dataset, &PARAMETER_THRESHOLDS);
        let controls = ControlState::initial(dataset.year_bounds(), 2015, 2013);

        let aggregates = handler.handle(&controls);

        assert!(aggregates.comparison.is_empty());
        assert!(!aggregates.warnings.is_empty());
    }
}
