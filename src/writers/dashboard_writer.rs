use crate::error::Result;
use crate::models::{ParameterThresholds, YearBounds};
use crate::processors::DashboardAggregates;
use crate::renderers::RenderedCharts;
use crate::utils::constants::{DASHBOARD_TITLE, HEATMAP_HEADER, TREND_HEADER};
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

/// Assembles the single dashboard page: sidebar with the control state,
/// then the three chart regions and any empty-aggregate warnings.
pub struct DashboardWriter<'a> {
    thresholds: &'a ParameterThresholds,
    year_bounds: YearBounds,
}

impl<'a> DashboardWriter<'a> {
    pub fn new(thresholds: &'a ParameterThresholds, year_bounds: YearBounds) -> Self {
        Self {
            thresholds,
            year_bounds,
        }
    }

    pub fn build_page(&self, aggregates: &DashboardAggregates, charts: &RenderedCharts) -> String {
        let controls = &aggregates.controls;
        let mut page = String::new();

        page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(page, "<title>{}</title>", DASHBOARD_TITLE);
        page.push_str(STYLE);
        page.push_str("</head>\n<body>\n");

        // Sidebar: parameter options in table order, then the year sliders
        page.push_str("<aside class=\"sidebar\">\n<h2>Select Parameter</h2>\n<ul class=\"options\">\n");
        for pollutant in self.thresholds.pollutants() {
            let class = if pollutant == controls.parameter {
                " class=\"selected\""
            } else {
                ""
            };
            let _ = writeln!(page, "<li{}>{}</li>", class, escape_html(pollutant.name()));
        }
        page.push_str("</ul>\n");
        let _ = writeln!(
            page,
            "<p>Select Start Year: <strong>{}</strong> <span class=\"bounds\">({}-{})</span></p>",
            controls.start_year, self.year_bounds.min, self.year_bounds.max
        );
        let _ = writeln!(
            page,
            "<p>Select End Year: <strong>{}</strong> <span class=\"bounds\">({}-{})</span></p>",
            controls.end_year, self.year_bounds.min, self.year_bounds.max
        );
        page.push_str("</aside>\n<main>\n");

        let _ = writeln!(page, "<h1>{}</h1>", DASHBOARD_TITLE);
        let _ = writeln!(page, "<section id=\"trend\">\n<h2>{}</h2>", TREND_HEADER);
        page.push_str(&charts.trend_svg);
        page.push_str("\n</section>\n");

        let _ = writeln!(page, "<section id=\"correlation\">\n<h2>{}</h2>", HEATMAP_HEADER);
        page.push_str(&charts.heatmap_svg);
        page.push_str("\n</section>\n");

        let _ = writeln!(
            page,
            "<section id=\"comparison\">\n<h2>Comparison of Air Quality across Stations ({})</h2>",
            controls.year_range_label()
        );
        page.push_str(&charts.comparison_svg);
        page.push_str("\n</section>\n");

        if !aggregates.warnings.is_empty() {
            page.push_str("<section id=\"warnings\">\n<h2>Warnings</h2>\n<ul>\n");
            for warning in &aggregates.warnings {
                let _ = writeln!(page, "<li>{}</li>", escape_html(&warning.to_string()));
            }
            page.push_str("</ul>\n</section>\n");
        }

        page.push_str("</main>\n</body>\n</html>\n");
        page
    }

    /// Build the page and write it to `path`, creating parent directories.
    pub fn write_page(
        &self,
        aggregates: &DashboardAggregates,
        charts: &RenderedCharts,
        path: &Path,
    ) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let page = self.build_page(aggregates, charts);
        std::fs::write(path, &page)?;
        info!("Dashboard written to {} ({} bytes)", path.display(), page.len());
        Ok(())
    }
}

const STYLE: &str = "<style>\n\
body { display: flex; font-family: sans-serif; margin: 0; }\n\
.sidebar { width: 220px; padding: 16px; background: #f0f2f6; min-height: 100vh; }\n\
.options { list-style: none; padding: 0; }\n\
.options li { padding: 4px 8px; }\n\
.options li.selected { background: #ff4b4b; color: white; border-radius: 4px; }\n\
.bounds { color: #666; font-size: 0.85em; }\n\
main { padding: 16px 32px; }\n\
section svg { max-width: 100%; height: auto; }\n\
#warnings { color: #8a6d3b; }\n\
</style>\n";

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
