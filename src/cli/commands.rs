use crate::analyzers::DatasetSummary;
use crate::cli::args::{Cli, Commands};
use crate::cli::interactive::InteractiveSession;
use crate::error::{DashboardError, Result};
use crate::models::{ControlState, ObservationDataset, Pollutant, PARAMETER_THRESHOLDS};
use crate::processors::InteractionHandler;
use crate::readers::ObservationReader;
use crate::renderers::DashboardRenderer;
use crate::settings::DashboardSettings;
use crate::utils::filename::generate_default_dashboard_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::DashboardWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(&cli)?;
    let settings = DashboardSettings::load(cli.config.as_deref())?;
    debug!("Settings: {:?}", settings);

    match cli.command {
        Commands::Render {
            data_file,
            output_file,
            parameter,
            start_year,
            end_year,
        } => {
            let data_file = data_file.unwrap_or_else(|| settings.data_file.clone());
            let output_file = output_file
                .unwrap_or_else(|| generate_default_dashboard_filename(&settings.output_dir));

            let dataset = load_dataset(&data_file, cli.quiet)?;
            let bounds = dataset.year_bounds();

            let mut controls = ControlState::initial(
                bounds,
                settings.default_start_year,
                settings.default_end_year,
            );
            if let Some(name) = parameter {
                controls = controls.with_parameter(name.parse::<Pollutant>()?);
            }
            if let Some(year) = start_year {
                controls = controls.with_start_year(year, bounds);
            }
            if let Some(year) = end_year {
                controls = controls.with_end_year(year, bounds);
            }

            let progress = ProgressReporter::new_spinner("Rendering dashboard...", cli.quiet);
            let handler = InteractionHandler::new(&dataset, &PARAMETER_THRESHOLDS);
            let aggregates = handler.handle(&controls);
            let charts = DashboardRenderer::from_settings(&settings).render(&aggregates)?;
            progress.set_message(&format!("Writing {}...", output_file.display()));
            DashboardWriter::new(handler.thresholds(), bounds).write_page(
                &aggregates,
                &charts,
                &output_file,
            )?;
            progress.finish_with_message(&format!(
                "Rendered {} ({}) to {}",
                controls.parameter,
                controls.year_range_label(),
                output_file.display()
            ));

            if !aggregates.warnings.is_empty() {
                progress.println(&format!(
                    "{} empty aggregate warning(s), see the page for details",
                    aggregates.warnings.len()
                ));
            }
        }

        Commands::Interactive {
            data_file,
            output_file,
        } => {
            let data_file = data_file.unwrap_or_else(|| settings.data_file.clone());
            let output_file: PathBuf = output_file
                .unwrap_or_else(|| generate_default_dashboard_filename(&settings.output_dir));

            // Silent: stdout carries the session transcript
            let dataset = load_dataset(&data_file, true)?;
            let bounds = dataset.year_bounds();
            let controls = ControlState::initial(
                bounds,
                settings.default_start_year,
                settings.default_end_year,
            );

            println!(
                "Parameters: {} | Years: {}-{}",
                PARAMETER_THRESHOLDS
                    .pollutants()
                    .map(|p| p.name())
                    .collect::<Vec<_>>()
                    .join(", "),
                bounds.min,
                bounds.max
            );

            let mut session = InteractiveSession::new(
                InteractionHandler::new(&dataset, &PARAMETER_THRESHOLDS),
                DashboardRenderer::from_settings(&settings),
                DashboardWriter::new(&PARAMETER_THRESHOLDS, bounds),
                output_file,
                controls,
            );
            let stdin = std::io::stdin();
            session.run(stdin.lock(), std::io::stdout())?;
            info!("Session ended after {} renders", session.renders());
        }

        Commands::Inspect { data_file } => {
            let data_file = data_file.unwrap_or_else(|| settings.data_file.clone());
            let dataset = load_dataset(&data_file, cli.quiet)?;

            let summary = DatasetSummary::from_dataset(&dataset);
            println!("Dataset: {}\n", data_file.display());
            println!("{}", summary.summary());
            println!("\nParameter Thresholds (not used by the charts):");
            println!("{}", PARAMETER_THRESHOLDS.summary());
        }
    }

    Ok(())
}

fn load_dataset(path: &Path, quiet: bool) -> Result<ObservationDataset> {
    let progress = ProgressReporter::new_spinner(
        &format!("Loading observations from {}...", path.display()),
        quiet,
    );
    let dataset = ObservationReader::new().read_dataset(path)?;
    progress.finish_with_message(&format!(
        "Loaded {} observations from {} stations",
        dataset.len(),
        dataset.stations().len()
    ));
    Ok(dataset)
}

fn init_logging(cli: &Cli) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("air_quality_dashboard={}", cli.log_level())));

    let result = match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(std::sync::Mutex::new(file)),
                )
                .try_init()
        }
        None => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init(),
    };

    result.map_err(|e| DashboardError::Configuration(format!("failed to initialise logging: {}", e)))
}
