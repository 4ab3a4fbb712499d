pub mod controls;
pub mod dataset;
pub mod observation;
pub mod parameter;
pub mod thresholds;

pub use controls::ControlState;
pub use dataset::{ObservationDataset, YearBounds};
pub use observation::Observation;
pub use parameter::{Measurement, Pollutant, WeatherVariable, MEASUREMENT_COUNT};
pub use thresholds::{ParameterThresholds, PARAMETER_THRESHOLDS};
