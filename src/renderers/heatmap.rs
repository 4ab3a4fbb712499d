use crate::analyzers::CorrelationMatrix;
use crate::error::Result;
use crate::settings::ChartSize;
use crate::utils::constants::HEATMAP_TITLE;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const NAN_CELL: RGBColor = RGBColor(200, 200, 200);
const COLORBAR_WIDTH: u32 = 90;

/// Diverging blue-white-red scale over [-1, 1].
pub fn coolwarm(value: f64) -> RGBColor {
    const COOL: (f64, f64, f64) = (59.0, 76.0, 192.0);
    const MID: (f64, f64, f64) = (221.0, 221.0, 221.0);
    const WARM: (f64, f64, f64) = (180.0, 4.0, 38.0);

    let t = ((value.clamp(-1.0, 1.0) + 1.0) / 2.0).clamp(0.0, 1.0);
    let (from, to, local) = if t < 0.5 {
        (COOL, MID, t * 2.0)
    } else {
        (MID, WARM, (t - 0.5) * 2.0)
    };
    let lerp = |a: f64, b: f64| (a + (b - a) * local).round() as u8;
    RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

pub fn format_coefficient(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.2}", value)
    }
}

/// Annotated correlation heatmap with a colour bar. Row 0 is drawn at the top.
pub fn render_correlation_heatmap(matrix: &CorrelationMatrix, size: ChartSize) -> Result<String> {
    let n = matrix.size();
    let names: Vec<&'static str> = matrix.columns().iter().map(|c| c.name()).collect();
    // Row i sits at y = n - 1 - i so the first column reads top-down
    let row_name = |y: &f64| {
        label_at(*y, n)
            .map(|k| names[n - 1 - k].to_string())
            .unwrap_or_default()
    };
    let col_name = |x: &f64| {
        label_at(*x, n)
            .map(|k| names[k].to_string())
            .unwrap_or_default()
    };
    let extent = n.max(1) as f64 - 0.5;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size.as_tuple()).into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled(HEATMAP_TITLE, ("sans-serif", 20))?;
        let split = size.width.saturating_sub(COLORBAR_WIDTH).max(1);
        let (main, bar) = root.split_horizontally(split);

        let mut chart = ChartBuilder::on(&main)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5f64..extent, -0.5f64..extent)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(n.max(1))
            .y_labels(n.max(1))
            .x_label_formatter(&col_name)
            .y_label_formatter(&row_name)
            .label_style(("sans-serif", 11))
            .draw()?;

        let cells: Vec<(f64, f64, f64)> = (0..n)
            .flat_map(|i| (0..n).map(move |j| (j as f64, (n - 1 - i) as f64, (i, j))))
            .map(|(x, y, (i, j))| (x, y, matrix.get(i, j)))
            .collect();

        chart.draw_series(cells.iter().map(|&(x, y, r)| {
            let fill = if r.is_nan() { NAN_CELL } else { coolwarm(r) };
            Rectangle::new([(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)], fill.filled())
        }))?;
        chart.draw_series(cells.iter().map(|&(x, y, _)| {
            Rectangle::new([(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)], WHITE.stroke_width(1))
        }))?;

        let centered = Pos::new(HPos::Center, VPos::Center);
        chart.draw_series(cells.iter().map(|&(x, y, r)| {
            let ink: &'static RGBColor = if !r.is_nan() && r.abs() > 0.6 {
                &WHITE
            } else {
                &BLACK
            };
            let style = ("sans-serif", 11).into_font().color(ink).pos(centered);
            Text::new(format_coefficient(r), (x, y), style)
        }))?;

        draw_colorbar(&bar)?;
        root.present()?;
    }
    Ok(svg)
}

fn draw_colorbar(area: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>) -> Result<()> {
    let mut bar = ChartBuilder::on(area)
        .margin(10)
        .margin_left(5)
        .y_label_area_size(0)
        .right_y_label_area_size(40)
        .x_label_area_size(40)
        .build_cartesian_2d(0f64..1f64, -1f64..1f64)?
        .set_secondary_coord(0f64..1f64, -1f64..1f64);

    bar.configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .disable_y_axis()
        .draw()?;
    bar.configure_secondary_axes()
        .y_labels(5)
        .label_style(("sans-serif", 11))
        .draw()?;

    let steps = 100;
    bar.draw_series((0..steps).map(|k| {
        let lo = -1.0 + 2.0 * k as f64 / steps as f64;
        let hi = -1.0 + 2.0 * (k + 1) as f64 / steps as f64;
        Rectangle::new([(0.0, lo), (1.0, hi)], coolwarm((lo + hi) / 2.0).filled())
    }))?;
    Ok(())
}

/// Index `k` when `v` is the tick at integer position `k` inside `0..n`.
fn label_at(v: f64, n: usize) -> Option<usize> {
    let k = v.round();
    if (v - k).abs() > 1e-6 || k < 0.0 || k >= n as f64 {
        None
    } else {
        Some(k as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::correlation_matrix;
    use crate::models::{Observation, ObservationDataset, Pollutant, WeatherVariable};

    #[test]
    fn test_coolwarm_endpoints() {
        assert_eq!(coolwarm(-1.0), RGBColor(59, 76, 192));
        assert_eq!(coolwarm(0.0), RGBColor(221, 221, 221));
        assert_eq!(coolwarm(1.0), RGBColor(180, 4, 38));
        assert_eq!(coolwarm(5.0), coolwarm(1.0));
    }

    #[test]
    fn test_format_coefficient() {
        assert_eq!(format_coefficient(0.12345), "0.12");
        assert_eq!(format_coefficient(-1.0), "-1.00");
        assert_eq!(format_coefficient(f64::NAN), "nan");
    }

    #[test]
    fn test_label_at_integer_ticks_only() {
        assert_eq!(label_at(0.0, 11), Some(0));
        assert_eq!(label_at(10.0, 11), Some(10));
        assert_eq!(label_at(11.0, 11), None);
        assert_eq!(label_at(2.5, 11), None);
        assert_eq!(label_at(-1.0, 11), None);
    }

    #[test]
    fn test_heatmap_with_nan_cells_renders() -> Result<()> {
        let dataset = ObservationDataset::new(
            (0..5)
                .map(|i| {
                    Observation::new("A", 2013 + i)
                        .with_value(WeatherVariable::Temp, i as f64)
                        .with_value(Pollutant::Pm25, (i * i) as f64)
                })
                .collect(),
        )
        .unwrap();
        let matrix = correlation_matrix(&dataset);

        let svg = render_correlation_heatmap(&matrix, ChartSize::new(700, 500))?;

        assert!(svg.contains(HEATMAP_TITLE));
        assert!(svg.contains("nan"));
        assert!(svg.contains("1.00"));
        Ok(())
    }
}
