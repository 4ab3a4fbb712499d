use crate::error::{DashboardError, Result};
use crate::models::{ControlState, Pollutant, YearBounds};
use crate::processors::{DashboardAggregates, InteractionHandler};
use crate::renderers::DashboardRenderer;
use crate::writers::DashboardWriter;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

const HELP: &str = "Commands:\n  \
parameter <PM2.5|PM10|SO2|NO2|CO|O3>  select the trend parameter\n  \
start <year>                          set the comparison start year\n  \
end <year>                            set the comparison end year\n  \
show                                  re-render the current state\n  \
help                                  show this message\n  \
quit                                  leave the session";

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    SetParameter(Pollutant),
    SetStartYear(i32),
    SetEndYear(i32),
    Show,
    Help,
    Quit,
}

impl ControlCommand {
    /// `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Ok(None);
        };
        let argument = words.next();
        if words.next().is_some() {
            return Err(DashboardError::Configuration(format!(
                "too many arguments in '{}'",
                line.trim()
            )));
        }

        let require = |what: &str| {
            argument.ok_or_else(|| {
                DashboardError::Configuration(format!("'{}' needs a {}", keyword, what))
            })
        };
        let year = |raw: &str| {
            raw.parse::<i32>()
                .map_err(|_| DashboardError::Configuration(format!("invalid year '{}'", raw)))
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "parameter" | "param" | "p" => {
                ControlCommand::SetParameter(require("parameter name")?.parse()?)
            }
            "start" => ControlCommand::SetStartYear(year(require("year")?)?),
            "end" => ControlCommand::SetEndYear(year(require("year")?)?),
            "show" => ControlCommand::Show,
            "help" | "?" => ControlCommand::Help,
            "quit" | "exit" | "q" => ControlCommand::Quit,
            other => {
                return Err(DashboardError::Configuration(format!(
                    "unknown command '{}', type 'help' for a list",
                    other
                )))
            }
        };
        Ok(Some(command))
    }
}

/// Control loop over a line-oriented input. Every accepted change
/// recomputes the aggregates from scratch and rewrites the page.
pub struct InteractiveSession<'a> {
    handler: InteractionHandler<'a>,
    renderer: DashboardRenderer,
    writer: DashboardWriter<'a>,
    output_file: PathBuf,
    bounds: YearBounds,
    controls: ControlState,
    renders: usize,
}

impl<'a> InteractiveSession<'a> {
    pub fn new(
        handler: InteractionHandler<'a>,
        renderer: DashboardRenderer,
        writer: DashboardWriter<'a>,
        output_file: PathBuf,
        controls: ControlState,
    ) -> Self {
        let bounds = handler.dataset().year_bounds();
        Self {
            handler,
            renderer,
            writer,
            output_file,
            bounds,
            controls,
            renders: 0,
        }
    }

    pub fn controls(&self) -> ControlState {
        self.controls
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn apply(&mut self, command: ControlCommand) {
        self.controls = match command {
            ControlCommand::SetParameter(p) => self.controls.with_parameter(p),
            ControlCommand::SetStartYear(y) => self.controls.with_start_year(y, self.bounds),
            ControlCommand::SetEndYear(y) => self.controls.with_end_year(y, self.bounds),
            ControlCommand::Show | ControlCommand::Help | ControlCommand::Quit => self.controls,
        };
    }

    pub fn refresh(&mut self) -> Result<DashboardAggregates> {
        let aggregates = self.handler.handle(&self.controls);
        let charts = self.renderer.render(&aggregates)?;
        self.writer
            .write_page(&aggregates, &charts, &self.output_file)?;
        self.renders += 1;
        Ok(aggregates)
    }

    /// Render once, then process commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        self.refresh()?;
        self.report(&mut out)?;
        writeln!(out, "Type 'help' for commands.")?;

        for line in input.lines() {
            let line = line?;
            match ControlCommand::parse(&line) {
                Ok(None) => {}
                Ok(Some(ControlCommand::Quit)) => break,
                Ok(Some(ControlCommand::Help)) => writeln!(out, "{}", HELP)?,
                Ok(Some(command)) => {
                    self.apply(command);
                    self.refresh()?;
                    self.report(&mut out)?;
                }
                Err(e) => {
                    warn!("Ignoring input: {}", e);
                    writeln!(out, "{}", e)?;
                }
            }
        }
        Ok(())
    }

    fn report<W: Write>(&self, out: &mut W) -> Result<()> {
        let note = if self.controls.is_inverted() {
            " (start after end: comparison is empty)"
        } else {
            ""
        };
        writeln!(
            out,
            "[{}] {} {}{} -> {}",
            self.renders,
            self.controls.parameter,
            self.controls.year_range_label(),
            note,
            self.output_file.display()
        )?;
        Ok(())
    }
}
