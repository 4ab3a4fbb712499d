use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Data load error: {0}")]
    DataLoad(#[from] DataLoadError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Chart rendering error: {0}")]
    Render(String),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while reading the observation dataset. All of them are fatal.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("data file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} is missing required columns: {}", path.display(), columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    #[error("{} line {line}: invalid value '{value}' in column '{column}'", path.display())]
    MalformedValue {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    #[error("{} contains no observations", path.display())]
    NoRows { path: PathBuf },
}

/// Which aggregate came back with nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateKind {
    Trend,
    Correlation,
    RangeComparison,
}

impl fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AggregateKind::Trend => "trend",
            AggregateKind::Correlation => "correlation",
            AggregateKind::RangeComparison => "range comparison",
        };
        f.write_str(name)
    }
}

/// Non-fatal: a filter matched zero rows. The chart is still rendered,
/// with the affected series, cell or bar left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyAggregateWarning {
    pub aggregate: AggregateKind,
    pub detail: String,
}

impl EmptyAggregateWarning {
    pub fn new(aggregate: AggregateKind, detail: impl Into<String>) -> Self {
        Self {
            aggregate,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for EmptyAggregateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "empty {} aggregate: {}", self.aggregate, self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_lists_every_column() {
        let err = DataLoadError::MissingColumns {
            path: PathBuf::from("data.csv"),
            columns: vec!["PM2.5".to_string(), "WSPM".to_string()],
        };

        assert_eq!(
            err.to_string(),
            "data.csv is missing required columns: PM2.5, WSPM"
        );
    }

    #[test]
    fn test_data_load_error_converts_into_dashboard_error() {
        let err: DashboardError = DataLoadError::NoRows {
            path: PathBuf::from("empty.csv"),
        }
        .into();

        assert!(matches!(err, DashboardError::DataLoad(_)));
        assert!(err.to_string().starts_with("Data load error:"));
    }

    #[test]
    fn test_warning_display() {
        let warning = EmptyAggregateWarning::new(AggregateKind::RangeComparison, "no rows for A");
        assert_eq!(
            warning.to_string(),
            "empty range comparison aggregate: no rows for A"
        );
    }
}
