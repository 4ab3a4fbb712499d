//! Dashboard settings.
//!
//! Defaults are serialized into a `config` source first, so a settings file
//! only needs the keys it changes.

use crate::error::Result;
use crate::utils::constants::{
    COMPARISON_CHART_SIZE, DEFAULT_DATA_FILE, DEFAULT_END_YEAR, DEFAULT_OUTPUT_DIR,
    DEFAULT_START_YEAR, HEATMAP_CHART_SIZE, TREND_CHART_SIZE,
};
use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ChartSize {
    #[validate(range(min = 100, max = 10000))]
    pub width: u32,

    #[validate(range(min = 100, max = 10000))]
    pub height: u32,
}

impl ChartSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn as_tuple(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl From<(u32, u32)> for ChartSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DashboardSettings {
    pub data_file: PathBuf,

    pub output_dir: PathBuf,

    pub default_start_year: i32,

    pub default_end_year: i32,

    #[validate(nested)]
    pub trend_chart: ChartSize,

    #[validate(nested)]
    pub heatmap_chart: ChartSize,

    #[validate(nested)]
    pub comparison_chart: ChartSize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            default_start_year: DEFAULT_START_YEAR,
            default_end_year: DEFAULT_END_YEAR,
            trend_chart: TREND_CHART_SIZE.into(),
            heatmap_chart: HEATMAP_CHART_SIZE.into(),
            comparison_chart: COMPARISON_CHART_SIZE.into(),
        }
    }
}

impl DashboardSettings {
    /// Load settings, layering an optional file over the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = path {
            debug!("Reading settings from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use std::io::Write;
    use tempfile::Builder;

    fn write_settings(contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() -> Result<()> {
        let settings = DashboardSettings::load(None)?;

        assert_eq!(settings, DashboardSettings::default());
        assert_eq!(settings.default_start_year, 2015);
        assert_eq!(settings.trend_chart.as_tuple(), (1000, 600));
        Ok(())
    }

    #[test]
    fn test_file_overrides_some_keys() -> Result<()> {
        let file = write_settings(
            "data_file = \"beijing.csv\"\n\
             default_end_year = 2016\n\
             \n\
             [heatmap_chart]\n\
             width = 900\n\
             height = 900\n",
        );

        let settings = DashboardSettings::load(Some(file.path()))?;

        assert_eq!(settings.data_file, PathBuf::from("beijing.csv"));
        assert_eq!(settings.default_end_year, 2016);
        assert_eq!(settings.default_start_year, 2015);
        assert_eq!(settings.heatmap_chart, ChartSize::new(900, 900));
        assert_eq!(settings.trend_chart, ChartSize::new(1000, 600));
        Ok(())
    }

    #[test]
    fn test_tiny_chart_fails_validation() {
        let file = write_settings("[trend_chart]\nwidth = 10\nheight = 600\n");

        let err = DashboardSettings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, DashboardError::Validation(_)));
    }

    #[test]
    fn test_missing_settings_file_is_an_error() {
        let err = DashboardSettings::load(Some(Path::new("no-such-settings.toml"))).unwrap_err();
        assert!(matches!(err, DashboardError::Settings(_)));
    }
}
