//! The mosaic workflow: pick image, resize, quantize, confirm, save, export
//!
//! Each step either produces its value or stops the whole run. Questions the
//! caller already answered through [`WorkflowOptions`] are not asked again.

use crate::io::configuration::{NO_IMAGE_MESSAGE, NO_SPREADSHEET_MESSAGE, PREVIEW_ZOOM};
use crate::io::error::Result;
use crate::io::image::{
    Dimensions, load_image, mosaic_output_path, preview_output_path, resize_image, save_png,
    zoom_preview,
};
use crate::io::progress::ProgressManager;
use crate::io::prompt::Prompter;
use crate::io::spreadsheet::{export_spreadsheet_with_progress, normalize_spreadsheet_path};
use crate::mosaic::{BrickCount, MosaicGrid};
use crate::palette::Palette;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Answers supplied up front; `None` fields are asked for interactively
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowOptions {
    /// Source image
    pub input: Option<PathBuf>,
    /// Mosaic size in bricks
    pub dimensions: Option<Dimensions>,
    /// Spreadsheet to write
    pub spreadsheet: Option<PathBuf>,
    /// Accept the preview without asking
    pub assume_yes: bool,
    /// Also save an enlarged preview image
    pub write_preview: bool,
}

/// Why a run stopped early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// Cancelled before the mosaic image was written
    NoImage,
    /// Cancelled after the mosaic image was written but before the spreadsheet
    NoSpreadsheet,
}

impl AbortReason {
    /// Message shown to the user
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoImage => NO_IMAGE_MESSAGE,
            Self::NoSpreadsheet => NO_SPREADSHEET_MESSAGE,
        }
    }
}

/// Files written by a completed run and the bricks it needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicReport {
    /// The mosaic PNG, one pixel per brick
    pub image_path: PathBuf,
    /// The exported workbook
    pub spreadsheet_path: PathBuf,
    /// The enlarged preview, when requested
    pub preview_path: Option<PathBuf>,
    /// Mosaic width in bricks
    pub width: usize,
    /// Mosaic height in bricks
    pub height: usize,
    /// Brick count per palette color
    pub bill_of_materials: Vec<BrickCount>,
}

impl MosaicReport {
    /// Directory holding the mosaic image
    pub fn directory(&self) -> &Path {
        self.image_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// Message shown when the run succeeds
    pub fn completion_message(&self) -> String {
        format!(
            "Your image and Excel file have been created and are stored in the directory:\n{}",
            self.directory().display()
        )
    }
}

/// Result of a workflow run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// Image and spreadsheet were written
    Completed(MosaicReport),
    /// The user cancelled at a prompt
    Aborted(AbortReason),
}

impl WorkflowOutcome {
    /// Message shown to the user at the end of the run
    pub fn message(&self) -> String {
        match self {
            Self::Completed(report) => report.completion_message(),
            Self::Aborted(reason) => reason.message().to_string(),
        }
    }
}

/// Runs the linear mosaic workflow against a [`Prompter`]
pub struct MosaicWorkflow<'a, P> {
    prompter: &'a mut P,
    options: WorkflowOptions,
    palette: Palette,
    progress: Option<ProgressManager>,
}

impl<'a, P: Prompter> MosaicWorkflow<'a, P> {
    /// Create a workflow using the built-in brick palette and no progress display
    pub fn new(prompter: &'a mut P, options: WorkflowOptions) -> Self {
        Self {
            prompter,
            options,
            palette: Palette::bricks(),
            progress: None,
        }
    }

    /// Quantize against `palette` instead of the built-in bricks
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Report row progress while quantizing and exporting
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressManager) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Run every step in order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source image cannot be read or decoded
    /// - A supplied dimension or spreadsheet path is invalid
    /// - The mosaic image or spreadsheet cannot be written
    /// - The prompter fails to read or write
    pub fn run(&mut self) -> Result<WorkflowOutcome> {
        let Some(input) = self.source_path()? else {
            return Ok(WorkflowOutcome::Aborted(AbortReason::NoImage));
        };
        let source = load_image(&input)?;
        info!(
            path = %input.display(),
            width = source.width(),
            height = source.height(),
            "loaded source image"
        );

        let Some(dimensions) = self.dimensions()? else {
            return Ok(WorkflowOutcome::Aborted(AbortReason::NoImage));
        };
        let resized = resize_image(&source, dimensions);
        debug!(
            width = dimensions.width(),
            height = dimensions.height(),
            "resized source image"
        );

        let grid = self.quantize(&resized);
        let mosaic = grid.to_image();
        info!(
            bricks = grid.len(),
            colors_used = grid.colors_used(),
            "quantized mosaic"
        );

        let confirmed = self.options.assume_yes || self.prompter.confirm_preview(&mosaic)?;
        if !confirmed {
            return Ok(WorkflowOutcome::Aborted(AbortReason::NoImage));
        }

        let image_path = mosaic_output_path(&input);
        save_png(&mosaic, &image_path)?;
        info!(path = %image_path.display(), "saved mosaic image");

        let preview_path = if self.options.write_preview {
            let path = preview_output_path(&input);
            save_png(&zoom_preview(&mosaic, PREVIEW_ZOOM), &path)?;
            info!(path = %path.display(), "saved preview image");
            Some(path)
        } else {
            None
        };

        let Some(spreadsheet_path) = self.spreadsheet_path()? else {
            return Ok(WorkflowOutcome::Aborted(AbortReason::NoSpreadsheet));
        };
        self.export(&grid, &spreadsheet_path)?;
        info!(path = %spreadsheet_path.display(), "exported spreadsheet");

        Ok(WorkflowOutcome::Completed(MosaicReport {
            image_path,
            spreadsheet_path,
            preview_path,
            width: grid.width(),
            height: grid.height(),
            bill_of_materials: grid.bill_of_materials(),
        }))
    }

    fn source_path(&mut self) -> Result<Option<PathBuf>> {
        if let Some(path) = self.options.input.take() {
            return Ok(Some(path));
        }

        loop {
            let Some(answer) = self.prompter.ask("Select your image:")? else {
                return Ok(None);
            };
            let path = PathBuf::from(answer);
            if path.is_file() {
                return Ok(Some(path));
            }
            self.prompter
                .report_error(&format!("No image file at '{}'.", path.display()))?;
        }
    }

    fn dimensions(&mut self) -> Result<Option<Dimensions>> {
        if let Some(dimensions) = self.options.dimensions {
            return Ok(Some(dimensions));
        }

        loop {
            let Some(width) = self.prompter.ask("Width:")? else {
                return Ok(None);
            };
            let Some(height) = self.prompter.ask("Height:")? else {
                return Ok(None);
            };
            match Dimensions::parse(&width, &height) {
                Ok(dimensions) => return Ok(Some(dimensions)),
                Err(error) => self.prompter.report_error(&error.to_string())?,
            }
        }
    }

    fn spreadsheet_path(&mut self) -> Result<Option<PathBuf>> {
        if let Some(path) = self.options.spreadsheet.take() {
            return normalize_spreadsheet_path(&path).map(Some);
        }

        loop {
            let Some(answer) = self.prompter.ask("Save spreadsheet as:")? else {
                return Ok(None);
            };
            match normalize_spreadsheet_path(Path::new(&answer)) {
                Ok(path) => return Ok(Some(path)),
                Err(error) => self.prompter.report_error(&error.to_string())?,
            }
        }
    }

    fn quantize(&mut self, image: &image::RgbImage) -> MosaicGrid {
        let Some(progress) = self.progress.as_mut() else {
            return self.palette.quantize_image(image);
        };

        progress.start_stage("Quantizing", image.height() as usize);
        let grid = self
            .palette
            .quantize_image_with_progress(image, |_| progress.advance());
        progress.finish_stage();
        grid
    }

    fn export(&mut self, grid: &MosaicGrid, path: &Path) -> Result<()> {
        let Some(progress) = self.progress.as_mut() else {
            return export_spreadsheet_with_progress(grid, path, |_| {});
        };

        progress.start_stage("Exporting", grid.height());
        let result = export_spreadsheet_with_progress(grid, path, |_| progress.advance());
        progress.finish_stage();
        result
    }
}
