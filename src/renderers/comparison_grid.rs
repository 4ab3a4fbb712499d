use crate::analyzers::{grid_position, ComparisonPanel, RangeComparison};
use crate::error::Result;
use crate::settings::ChartSize;
use crate::utils::constants::{
    COMPARISON_GRID_COLS, COMPARISON_GRID_ROWS, COMPARISON_X_LABEL, COMPARISON_Y_LABEL,
};
use plotters::coord::Shift;
use plotters::prelude::*;

/// Six bar charts, one per pollutant, one bar per station. Undefined means
/// leave a gap where the bar would be.
pub fn render_comparison_grid(comparison: &RangeComparison, size: ChartSize) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size.as_tuple()).into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled(
            &format!(
                "Comparison of Air Quality Parameters ({}-{})",
                comparison.start_year, comparison.end_year
            ),
            ("sans-serif", 26),
        )?;

        let areas = root.split_evenly((COMPARISON_GRID_ROWS, COMPARISON_GRID_COLS));
        for (index, panel) in comparison.panels.iter().enumerate() {
            let (row, col) = grid_position(index);
            if let Some(area) = areas.get(row * COMPARISON_GRID_COLS + col) {
                draw_panel(area, panel)?;
            }
        }

        root.present()?;
    }
    Ok(svg)
}

fn draw_panel(area: &DrawingArea<SVGBackend<'_>, Shift>, panel: &ComparisonPanel) -> Result<()> {
    let stations: Vec<&str> = panel.bars.iter().map(|b| b.station.as_str()).collect();
    let count = stations.len().max(1);
    let (y_min, y_max) = bar_range(panel.min_value(), panel.max_value());

    let station_label = |x: &f64| {
        let k = x.round();
        if (x - k).abs() > 1e-6 || k < 0.0 {
            return String::new();
        }
        stations.get(k as usize).map(|s| s.to_string()).unwrap_or_default()
    };

    let mut chart = ChartBuilder::on(area)
        .caption(panel.pollutant.name(), ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..(count as f64 - 0.5), y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(count)
        .x_label_formatter(&station_label)
        .x_desc(COMPARISON_X_LABEL)
        .y_desc(COMPARISON_Y_LABEL)
        .label_style(("sans-serif", 10))
        .draw()?;

    chart.draw_series(panel.bars.iter().enumerate().filter_map(|(k, bar)| {
        let mean = bar.value().filter(|m| m.is_finite())?;
        let x = k as f64;
        let color = Palette99::pick(k).to_rgba();
        Some(Rectangle::new([(x - 0.4, 0.0), (x + 0.4, mean)], color.filled()))
    }))?;

    Ok(())
}

/// Value axis always includes zero; `0..1` when nothing finite is defined.
fn bar_range(min: Option<f64>, max: Option<f64>) -> (f64, f64) {
    let finite = |v: Option<f64>| v.filter(|v| v.is_finite()).unwrap_or(0.0);
    let lo = finite(min).min(0.0);
    let hi = finite(max).max(0.0);
    if lo == hi {
        (0.0, 1.0)
    } else {
        (lo * 1.1, hi * 1.1)
    }
}
