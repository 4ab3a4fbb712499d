use crate::analyzers::TrendAggregate;
use crate::error::Result;
use crate::settings::ChartSize;
use plotters::prelude::*;

/// Line chart with one series per station. Stations without points are
/// skipped; an aggregate with no points renders empty axes.
pub fn render_trend_chart(trend: &TrendAggregate, size: ChartSize) -> Result<String> {
    let (x_min, x_max) = match trend.year_span() {
        Some((lo, hi)) if lo == hi => (lo - 1, hi + 1),
        Some(span) => span,
        None => (0, 1),
    };
    let (y_min, y_max) = padded_range(trend.value_span());

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size.as_tuple()).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Trend of {} across Stations", trend.parameter),
                ("sans-serif", 24),
            )
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc("Year")
            .y_desc(trend.parameter.name())
            .x_labels((x_max - x_min + 1).clamp(2, 12) as usize)
            .draw()?;

        let mut drawn = 0;
        for (idx, series) in trend.series.iter().enumerate() {
            let color = Palette99::pick(idx).to_rgba();
            let points: Vec<(i32, f64)> = series
                .points
                .iter()
                .filter(|p| p.value.is_finite())
                .map(|p| (p.year, p.value))
                .collect();
            if points.is_empty() {
                continue;
            }

            chart
                .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
                .label(series.station.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            chart.draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, 3, color.filled())),
            )?;
            drawn += 1;
        }

        if drawn > 0 {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }

        root.present()?;
    }
    Ok(svg)
}

/// Axis range around the data with 5% headroom; `0..1` with no finite data.
fn padded_range(span: Option<(f64, f64)>) -> (f64, f64) {
    match span {
        Some((lo, hi)) if !lo.is_finite() || !hi.is_finite() => (0.0, 1.0),
        None => (0.0, 1.0),
        Some((lo, hi)) if lo == hi => (lo - 1.0, hi + 1.0),
        Some((lo, hi)) => {
            let pad = (hi - lo) * 0.05;
            (lo - pad, hi + pad)
        }
    }
}
