pub mod comparison_grid;
pub mod heatmap;
pub mod trend_chart;

pub use comparison_grid::render_comparison_grid;
pub use heatmap::{coolwarm, render_correlation_heatmap};
pub use trend_chart::render_trend_chart;

use crate::error::{DashboardError, Result};
use crate::processors::DashboardAggregates;
use crate::settings::{ChartSize, DashboardSettings};
use plotters::drawing::DrawingAreaErrorKind;
use tracing::debug;

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for DashboardError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        DashboardError::Render(err.to_string())
    }
}

/// The three chart regions as standalone SVG documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCharts {
    pub trend_svg: String,
    pub heatmap_svg: String,
    pub comparison_svg: String,
}

pub struct DashboardRenderer {
    trend_size: ChartSize,
    heatmap_size: ChartSize,
    comparison_size: ChartSize,
}

impl DashboardRenderer {
    pub fn new(trend_size: ChartSize, heatmap_size: ChartSize, comparison_size: ChartSize) -> Self {
        Self {
            trend_size,
            heatmap_size,
            comparison_size,
        }
    }

    pub fn from_settings(settings: &DashboardSettings) -> Self {
        Self::new(
            settings.trend_chart,
            settings.heatmap_chart,
            settings.comparison_chart,
        )
    }

    pub fn render(&self, aggregates: &DashboardAggregates) -> Result<RenderedCharts> {
        let charts = RenderedCharts {
            trend_svg: render_trend_chart(&aggregates.trend, self.trend_size)?,
            heatmap_svg: render_correlation_heatmap(&aggregates.correlation, self.heatmap_size)?,
            comparison_svg: render_comparison_grid(&aggregates.comparison, self.comparison_size)?,
        };
        debug!(
            "Rendered charts: trend {} bytes, heatmap {} bytes, comparison {} bytes",
            charts.trend_svg.len(),
            charts.heatmap_svg.len(),
            charts.comparison_svg.len()
        );
        Ok(charts)
    }
}

impl Default for DashboardRenderer {
    fn default() -> Self {
        Self::from_settings(&DashboardSettings::default())
    }
}
