use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "air-quality-dashboard")]
#[command(about = "Air quality dashboard: pollutant trends, correlations and station comparisons")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Only log warnings and hide progress"
    )]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Settings file (TOML)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard page for one set of control values
    Render {
        #[arg(short, long, help = "Input CSV file [default: from settings]")]
        data_file: Option<PathBuf>,

        #[arg(
            short,
            long,
            help = "Output HTML file [default: output/air-quality-dashboard-{YYMMDD}.html]"
        )]
        output_file: Option<PathBuf>,

        #[arg(short, long, help = "Parameter to plot over time (PM2.5, PM10, SO2, NO2, CO, O3)")]
        parameter: Option<String>,

        #[arg(short, long, help = "First year of the station comparison")]
        start_year: Option<i32>,

        #[arg(short, long, help = "Last year of the station comparison")]
        end_year: Option<i32>,
    },

    /// Read control changes from stdin and re-render after each one
    Interactive {
        #[arg(short, long, help = "Input CSV file [default: from settings]")]
        data_file: Option<PathBuf>,

        #[arg(
            short,
            long,
            help = "Output HTML file [default: output/air-quality-dashboard-{YYMMDD}.html]"
        )]
        output_file: Option<PathBuf>,
    },

    /// Summarise the dataset and list the parameter thresholds
    Inspect {
        #[arg(short, long, help = "Input CSV file [default: from settings]")]
        data_file: Option<PathBuf>,
    },
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
