pub mod correlation;
pub mod dataset_summary;
pub mod range_comparison;
pub mod statistics;
pub mod trend;

pub use correlation::{correlation_matrix, correlation_matrix_for, CorrelationMatrix};
pub use dataset_summary::DatasetSummary;
pub use range_comparison::{compare_stations, grid_position, ComparisonPanel, RangeComparison, StationMean};
pub use trend::{aggregate_trend, TrendAggregate, TrendPoint, TrendSeries};
