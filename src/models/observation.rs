use crate::models::{Measurement, Pollutant, WeatherVariable, MEASUREMENT_COUNT};

/// One row of the dataset: a station's measurements for a point in time.
/// Missing measurements are stored as NaN.
#[derive(Debug, Clone)]
pub struct Observation {
    pub station: String,
    pub year: i32,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub hour: Option<u8>,
    values: [f64; MEASUREMENT_COUNT],
}

impl Observation {
    pub fn new(station: impl Into<String>, year: i32) -> Self {
        Self {
            station: station.into(),
            year,
            month: None,
            day: None,
            hour: None,
            values: [f64::NAN; MEASUREMENT_COUNT],
        }
    }

    pub fn with_value(mut self, measurement: impl Into<Measurement>, value: f64) -> Self {
        self.set_value(measurement, value);
        self
    }

    pub fn set_value(&mut self, measurement: impl Into<Measurement>, value: f64) {
        self.values[measurement.into().index()] = value;
    }

    pub fn value(&self, measurement: impl Into<Measurement>) -> f64 {
        self.values[measurement.into().index()]
    }

    pub fn pollutant(&self, pollutant: Pollutant) -> f64 {
        self.value(pollutant)
    }

    pub fn weather(&self, variable: WeatherVariable) -> f64 {
        self.value(variable)
    }

    pub fn is_missing(&self, measurement: impl Into<Measurement>) -> bool {
        self.value(measurement).is_nan()
    }

    pub fn values(&self) -> &[f64; MEASUREMENT_COUNT] {
        &self.values
    }
}
