//! Image loading, resizing and PNG export

use crate::io::configuration::{
    IMAGE_EXTENSION, MAX_SHEET_COLUMNS, MAX_SHEET_ROWS, OUTPUT_SUFFIX, PREVIEW_SUFFIX,
};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use image::RgbImage;
use image::imageops::{self, FilterType};
use std::path::{Path, PathBuf};

/// Target mosaic size in bricks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Validate a requested size
    ///
    /// # Errors
    ///
    /// Returns an error if either side is zero or negative, or exceeds what a
    /// spreadsheet can hold (one column per brick, one row per brick row)
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let width = Self::validate_side("width", width, MAX_SHEET_COLUMNS)?;
        let height = Self::validate_side("height", height, MAX_SHEET_ROWS)?;
        Ok(Self { width, height })
    }

    /// Parse a size from free-form text, as typed at a prompt
    ///
    /// # Errors
    ///
    /// Returns an error if either value is not an integer or fails [`Dimensions::new`]
    pub fn parse(width: &str, height: &str) -> Result<Self> {
        let width_value = Self::parse_side("width", width)?;
        let height_value = Self::parse_side("height", height)?;
        Self::new(width_value, height_value)
    }

    /// Width in bricks
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in bricks
    pub const fn height(&self) -> u32 {
        self.height
    }

    fn parse_side(parameter: &'static str, text: &str) -> Result<i64> {
        let trimmed = text.trim();
        trimmed
            .parse::<i64>()
            .map_err(|_parse_error| invalid_parameter(parameter, &trimmed, &"must be an integer"))
    }

    fn validate_side(parameter: &'static str, value: i64, limit: u32) -> Result<u32> {
        if value <= 0 {
            return Err(invalid_parameter(
                parameter,
                &value,
                &"must be a positive integer",
            ));
        }
        match u32::try_from(value) {
            Ok(side) if side <= limit => Ok(side),
            _ => Err(invalid_parameter(
                parameter,
                &value,
                &format!("must not exceed {limit}"),
            )),
        }
    }
}

/// Load an image from disk, discarding any alpha channel
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Resample `image` to exactly the requested size with a Lanczos filter
///
/// An image that already has the requested size is returned unchanged.
pub fn resize_image(image: &RgbImage, dimensions: Dimensions) -> RgbImage {
    if image.dimensions() == (dimensions.width(), dimensions.height()) {
        return image.clone();
    }
    imageops::resize(
        image,
        dimensions.width(),
        dimensions.height(),
        FilterType::Lanczos3,
    )
}

/// Enlarge `image` by an integer factor without smoothing, one block per pixel
pub fn zoom_preview(image: &RgbImage, factor: u32) -> RgbImage {
    let factor = factor.max(1);
    imageops::resize(
        image,
        image.width().saturating_mul(factor),
        image.height().saturating_mul(factor),
        FilterType::Nearest,
    )
}

/// Save `image` as PNG, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| MosaicError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

/// `<dir>/<stem>_legomosaic.png` for an input image path
pub fn mosaic_output_path(input_path: &Path) -> PathBuf {
    sibling_path(input_path, OUTPUT_SUFFIX)
}

/// `<dir>/<stem>_legomosaic_preview.png` for an input image path
pub fn preview_output_path(input_path: &Path) -> PathBuf {
    sibling_path(input_path, PREVIEW_SUFFIX)
}

fn sibling_path(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.{IMAGE_EXTENSION}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}
