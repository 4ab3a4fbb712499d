use chrono::{Datelike, Local};
use std::path::{Path, PathBuf};

/// Generate default dashboard filename with format: air-quality-dashboard-{YYMMDD}.html
pub fn generate_default_dashboard_filename(output_dir: &Path) -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!(
        "air-quality-dashboard-{:02}{:02}{:02}.html",
        year, month, day
    );
    output_dir.join(filename)
}
