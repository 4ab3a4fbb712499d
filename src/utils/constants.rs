/// Required CSV column names
pub const STATION_COLUMN: &str = "station";
pub const YEAR_COLUMN: &str = "year";

/// Optional time columns carried through when present
pub const MONTH_COLUMN: &str = "month";
pub const DAY_COLUMN: &str = "day";
pub const HOUR_COLUMN: &str = "hour";

/// Cell contents treated as missing (besides an empty cell); pandas' default `na_values`
pub const MISSING_VALUE_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Default control values, clamped into the dataset's year bounds
pub const DEFAULT_START_YEAR: i32 = 2015;
pub const DEFAULT_END_YEAR: i32 = 2017;

/// File names
pub const DEFAULT_DATA_FILE: &str = "data_air_quality.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Chart sizes in pixels
pub const TREND_CHART_SIZE: (u32, u32) = (1000, 600);
pub const HEATMAP_CHART_SIZE: (u32, u32) = (700, 500);
pub const COMPARISON_CHART_SIZE: (u32, u32) = (1800, 1000);

/// Comparison grid layout
pub const COMPARISON_GRID_ROWS: usize = 2;
pub const COMPARISON_GRID_COLS: usize = 3;

/// Page and chart titles
pub const DASHBOARD_TITLE: &str = "Dashboard Air Quality";
pub const TREND_HEADER: &str = "Parameter Trends Over Time";
pub const HEATMAP_HEADER: &str = "Heatmap of Correlation between Weather and Air Quality Parameters";
pub const HEATMAP_TITLE: &str = "Heatmap of Correlation between Parameters";
pub const COMPARISON_X_LABEL: &str = "Station";
pub const COMPARISON_Y_LABEL: &str = "Mean Air Quality";
