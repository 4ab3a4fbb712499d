use crate::error::{DataLoadError, Result};
use crate::models::{Measurement, Observation, ObservationDataset, MEASUREMENT_COUNT};
use crate::utils::constants::{
    DAY_COLUMN, HOUR_COLUMN, MISSING_VALUE_MARKERS, MONTH_COLUMN, STATION_COLUMN, YEAR_COLUMN,
};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Positions of the known columns within the CSV header.
struct ColumnIndex {
    station: usize,
    year: usize,
    month: Option<usize>,
    day: Option<usize>,
    hour: Option<usize>,
    measurements: [usize; MEASUREMENT_COUNT],
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord, path: &Path) -> std::result::Result<Self, DataLoadError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let mut missing = Vec::new();

        let station = find(STATION_COLUMN);
        if station.is_none() {
            missing.push(STATION_COLUMN.to_string());
        }
        let year = find(YEAR_COLUMN);
        if year.is_none() {
            missing.push(YEAR_COLUMN.to_string());
        }

        let mut measurements = [0usize; MEASUREMENT_COUNT];
        for measurement in Measurement::ALL {
            match find(measurement.name()) {
                Some(pos) => measurements[measurement.index()] = pos,
                None => missing.push(measurement.name().to_string()),
            }
        }

        match (station, year) {
            (Some(station), Some(year)) if missing.is_empty() => Ok(Self {
                station,
                year,
                month: find(MONTH_COLUMN),
                day: find(DAY_COLUMN),
                hour: find(HOUR_COLUMN),
                measurements,
            }),
            _ => Err(DataLoadError::MissingColumns {
                path: path.to_path_buf(),
                columns: missing,
            }),
        }
    }
}

/// Cells are trimmed before parsing.
#[derive(Debug, Default)]
pub struct ObservationReader;

impl ObservationReader {
    pub fn new() -> Self {
        Self
    }

    /// Load the dataset from a CSV file.
    pub fn read_dataset(&self, path: &Path) -> Result<ObservationDataset> {
        if !path.is_file() {
            return Err(DataLoadError::NotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let file = std::fs::File::open(path).map_err(|e| DataLoadError::Read {
            path: path.to_path_buf(),
            source: csv::Error::from(e),
        })?;
        let observations = self.read_observations(file, path)?;

        let dataset = ObservationDataset::new(observations).ok_or_else(|| DataLoadError::NoRows {
            path: path.to_path_buf(),
        })?;

        let bounds = dataset.year_bounds();
        info!(
            "Loaded {} observations for {} stations ({}-{}) from {}",
            dataset.len(),
            dataset.stations().len(),
            bounds.min,
            bounds.max,
            path.display()
        );
        Ok(dataset)
    }

    /// Parse observations from any CSV source. `path` is only used in errors.
    pub fn read_observations<R: Read>(
        &self,
        source: R,
        path: &Path,
    ) -> std::result::Result<Vec<Observation>, DataLoadError> {
        let read_error = |source: csv::Error| DataLoadError::Read {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(source);

        let headers = reader.headers().map_err(read_error)?.clone();
        let columns = ColumnIndex::from_headers(&headers, path)?;
        debug!("Resolved {} header columns", headers.len());

        let mut observations = Vec::new();
        for record in reader.records() {
            let record = record.map_err(read_error)?;
            observations.push(self.parse_record(&record, &headers, &columns, path)?);
        }

        Ok(observations)
    }

    fn parse_record(
        &self,
        record: &StringRecord,
        headers: &StringRecord,
        columns: &ColumnIndex,
        path: &Path,
    ) -> std::result::Result<Observation, DataLoadError> {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let malformed = |index: usize, value: &str| DataLoadError::MalformedValue {
            path: path.to_path_buf(),
            line,
            column: headers.get(index).unwrap_or_default().to_string(),
            value: value.to_string(),
        };
        let field = |index: usize| record.get(index).unwrap_or_default();

        let station = field(columns.station);
        if station.is_empty() {
            return Err(malformed(columns.station, station));
        }

        let year_raw = field(columns.year);
        let year = parse_year(year_raw).ok_or_else(|| malformed(columns.year, year_raw))?;

        let mut observation = Observation::new(station, year);

        let time_field = |index: Option<usize>| -> std::result::Result<Option<u8>, DataLoadError> {
            match index {
                None => Ok(None),
                Some(i) => {
                    let raw = field(i);
                    parse_time_field(raw).ok_or_else(|| malformed(i, raw))
                }
            }
        };
        observation.month = time_field(columns.month)?;
        observation.day = time_field(columns.day)?;
        observation.hour = time_field(columns.hour)?;

        for measurement in Measurement::ALL {
            let index = columns.measurements[measurement.index()];
            let raw = field(index);
            let value = parse_measurement(raw).ok_or_else(|| malformed(index, raw))?;
            observation.set_value(measurement, value);
        }

        Ok(observation)
    }
}

fn is_missing_marker(raw: &str) -> bool {
    raw.is_empty() || MISSING_VALUE_MARKERS.contains(&raw)
}

/// Integral value, also accepting a float with no fractional part ("2015.0").
fn parse_integral(raw: &str, min: f64, max: f64) -> Option<i64> {
    if let Ok(value) = raw.parse::<i64>() {
        return (min..=max).contains(&(value as f64)).then_some(value);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && (min..=max).contains(&value) {
        Some(value as i64)
    } else {
        None
    }
}

fn parse_year(raw: &str) -> Option<i32> {
    parse_integral(raw, i32::MIN as f64, i32::MAX as f64).map(|v| v as i32)
}

/// Optional month/day/hour cell: `Some(None)` when missing, `None` when malformed.
fn parse_time_field(raw: &str) -> Option<Option<u8>> {
    if is_missing_marker(raw) {
        return Some(None);
    }
    parse_integral(raw, 0.0, u8::MAX as f64).map(|v| Some(v as u8))
}

/// Missing markers and non-finite numbers ("inf", "-infinity") become NaN.
fn parse_measurement(raw: &str) -> Option<f64> {
    if is_missing_marker(raw) {
        return Some(f64::NAN);
    }
    let value = raw.parse::<f64>().ok()?;
    Some(if value.is_finite() { value } else { f64::NAN })
}
