use crate::models::{Pollutant, YearBounds};

/// Current values of the dashboard controls: the parameter picker and the
/// two year sliders.
///
/// Year setters clamp into the dataset bounds the way a slider would, but
/// do not order the two years; `start_year > end_year` is a valid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub parameter: Pollutant,
    pub start_year: i32,
    pub end_year: i32,
}

impl ControlState {
    pub fn initial(bounds: YearBounds, default_start: i32, default_end: i32) -> Self {
        Self {
            parameter: Pollutant::ALL[0],
            start_year: bounds.clamp(default_start),
            end_year: bounds.clamp(default_end),
        }
    }

    pub fn with_parameter(mut self, parameter: Pollutant) -> Self {
        self.parameter = parameter;
        self
    }

    pub fn with_start_year(mut self, year: i32, bounds: YearBounds) -> Self {
        self.start_year = bounds.clamp(year);
        self
    }

    pub fn with_end_year(mut self, year: i32, bounds: YearBounds) -> Self {
        self.end_year = bounds.clamp(year);
        self
    }

    pub fn is_inverted(&self) -> bool {
        self.start_year > self.end_year
    }

    pub fn year_range_label(&self) -> String {
        format!("{}-{}", self.start_year, self.end_year)
    }
}
