use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// Number of measurement columns carried by each observation.
pub const MEASUREMENT_COUNT: usize = WeatherVariable::ALL.len() + Pollutant::ALL.len();

/// The six pollutants, in parameter picker order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pollutant {
    Pm25,
    Pm10,
    So2,
    No2,
    Co,
    O3,
}

impl Pollutant {
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::So2,
        Pollutant::No2,
        Pollutant::Co,
        Pollutant::O3,
    ];

    /// Column name in the input CSV.
    pub fn name(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::So2 => "SO2",
            Pollutant::No2 => "NO2",
            Pollutant::Co => "CO",
            Pollutant::O3 => "O3",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pollutant {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Pollutant::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                DashboardError::Configuration(format!(
                    "unknown parameter '{}', expected one of: {}",
                    trimmed,
                    Pollutant::ALL
                        .iter()
                        .map(|p| p.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

/// The five weather columns correlated against the pollutants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WeatherVariable {
    Temp,
    Pres,
    Dewp,
    Rain,
    Wspm,
}

impl WeatherVariable {
    pub const ALL: [WeatherVariable; 5] = [
        WeatherVariable::Temp,
        WeatherVariable::Pres,
        WeatherVariable::Dewp,
        WeatherVariable::Rain,
        WeatherVariable::Wspm,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WeatherVariable::Temp => "TEMP",
            WeatherVariable::Pres => "PRES",
            WeatherVariable::Dewp => "DEWP",
            WeatherVariable::Rain => "RAIN",
            WeatherVariable::Wspm => "WSPM",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for WeatherVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any numeric column of an observation.
///
/// Weather columns come first, then pollutants; this is both the storage
/// order inside [`Observation`](crate::models::Observation) and the row and
/// column order of the correlation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measurement {
    Weather(WeatherVariable),
    Pollutant(Pollutant),
}

impl Measurement {
    pub const ALL: [Measurement; MEASUREMENT_COUNT] = [
        Measurement::Weather(WeatherVariable::Temp),
        Measurement::Weather(WeatherVariable::Pres),
        Measurement::Weather(WeatherVariable::Dewp),
        Measurement::Weather(WeatherVariable::Rain),
        Measurement::Weather(WeatherVariable::Wspm),
        Measurement::Pollutant(Pollutant::Pm25),
        Measurement::Pollutant(Pollutant::Pm10),
        Measurement::Pollutant(Pollutant::So2),
        Measurement::Pollutant(Pollutant::No2),
        Measurement::Pollutant(Pollutant::Co),
        Measurement::Pollutant(Pollutant::O3),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Measurement::Weather(w) => w.name(),
            Measurement::Pollutant(p) => p.name(),
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Measurement::Weather(w) => w.index(),
            Measurement::Pollutant(p) => WeatherVariable::ALL.len() + p.index(),
        }
    }
}

impl From<Pollutant> for Measurement {
    fn from(p: Pollutant) -> Self {
        Measurement::Pollutant(p)
    }
}

impl From<WeatherVariable> for Measurement {
    fn from(w: WeatherVariable) -> Self {
        Measurement::Weather(w)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pollutant_names() {
        assert_eq!("PM2.5".parse::<Pollutant>().unwrap(), Pollutant::Pm25);
        assert_eq!("pm10".parse::<Pollutant>().unwrap(), Pollutant::Pm10);
        assert_eq!(" O3 ".parse::<Pollutant>().unwrap(), Pollutant::O3);
    }

    #[test]
    fn test_unknown_pollutant_is_configuration_error() {
        let err = "TEMP".parse::<Pollutant>().unwrap_err();
        assert!(matches!(err, DashboardError::Configuration(_)));
        assert!(err.to_string().contains("PM2.5, PM10, SO2, NO2, CO, O3"));
    }

    #[test]
    fn test_measurement_indices_cover_storage_order() {
        for (i, m) in Measurement::ALL.iter().enumerate() {
            assert_eq!(m.index(), i, "{} out of place", m);
        }
        assert_eq!(Measurement::from(Pollutant::Pm25).index(), 5);
        assert_eq!(Measurement::from(WeatherVariable::Wspm).index(), 4);
    }
}
