//! Command-line interface and application entry

use crate::io::error::Result;
use crate::io::image::Dimensions;
use crate::io::progress::ProgressManager;
use crate::io::prompt::{Prompter, TerminalPrompter};
use crate::io::spreadsheet::normalize_spreadsheet_path;
use crate::io::workflow::{MosaicWorkflow, WorkflowOptions, WorkflowOutcome};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "brickmosaic")]
#[command(
    author,
    version,
    about = "Turn a photo into a brick mosaic with a spreadsheet parts list"
)]
/// Command-line arguments; anything left out is asked for interactively
pub struct Cli {
    /// Source image (asked for when omitted)
    #[arg(value_name = "IMAGE")]
    pub image: Option<PathBuf>,

    /// Mosaic width in bricks
    #[arg(short = 'w', long, requires = "height", allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Mosaic height in bricks
    #[arg(short = 'H', long, requires = "width", allow_negative_numbers = true)]
    pub height: Option<i64>,

    /// Spreadsheet to write (.xlsx is appended when no extension is given)
    #[arg(short, long, value_name = "XLSX")]
    pub output: Option<PathBuf>,

    /// Accept the preview without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Also save an enlarged preview image next to the mosaic
    #[arg(short, long)]
    pub preview_png: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log level for the verbosity flags, overridden by `RUST_LOG`
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Convert arguments into pre-answered workflow questions
    ///
    /// # Errors
    ///
    /// Returns an error if the supplied dimensions or spreadsheet path are invalid
    pub fn workflow_options(&self) -> Result<WorkflowOptions> {
        let dimensions = match (self.width, self.height) {
            (Some(width), Some(height)) => Some(Dimensions::new(width, height)?),
            _ => None,
        };
        let spreadsheet = self
            .output
            .as_deref()
            .map(normalize_spreadsheet_path)
            .transpose()?;

        Ok(WorkflowOptions {
            input: self.image.clone(),
            dimensions,
            spreadsheet,
            assume_yes: self.yes,
            write_preview: self.preview_png,
        })
    }
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` takes precedence over `default_level`. Calling this twice is harmless.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Drives one workflow run from parsed arguments
pub struct MosaicApp {
    cli: Cli,
}

impl MosaicApp {
    /// Create the application from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the workflow on the terminal and show the outcome message
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, file processing or terminal I/O fails
    pub fn run(&self) -> Result<WorkflowOutcome> {
        let mut prompter = TerminalPrompter::stdio();
        self.run_with(&mut prompter)
    }

    /// Run the workflow against any prompter and show the outcome message
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, file processing or prompting fails
    pub fn run_with<P: Prompter>(&self, prompter: &mut P) -> Result<WorkflowOutcome> {
        let options = self.cli.workflow_options()?;
        let outcome = {
            let mut workflow = MosaicWorkflow::new(prompter, options);
            if self.cli.should_show_progress() {
                workflow = workflow.with_progress(ProgressManager::new());
            }
            workflow.run()?
        };
        match &outcome {
            WorkflowOutcome::Completed(report) => {
                for entry in report.bill_of_materials.iter().filter(|e| e.count > 0) {
                    info!(
                        number = entry.number,
                        code = entry.color.code,
                        hex = %entry.color.hex(),
                        count = entry.count,
                        "bricks required"
                    );
                }
            }
            WorkflowOutcome::Aborted(reason) => warn!(?reason, "workflow cancelled"),
        }

        prompter.notify(&outcome.message())?;
        Ok(outcome)
    }
}
