//! Mosaic grid of palette indices
//!
//! The grid is stored as `(rows, cols)` = `(height, width)` so that spreadsheet
//! cells, image pixels and array positions all share the same row/column
//! convention. Every output format is rendered from this one structure.

use crate::io::error::{Result, invalid_parameter};
use crate::palette::{BrickColor, Palette};
use image::{Rgb, RgbImage};
use ndarray::Array2;

/// Number of bricks of one color in a mosaic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickCount {
    /// One-based position of the color in the palette
    pub number: usize,
    /// The brick color
    pub color: BrickColor,
    /// Bricks of this color in the mosaic
    pub count: usize,
}

/// Quantized mosaic with the palette it was matched against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicGrid {
    indices: Array2<u8>,
    palette: Palette,
}

impl MosaicGrid {
    /// Build a grid from palette indices laid out as `(height, width)`
    ///
    /// # Errors
    ///
    /// Returns an error if any index does not name a palette color
    pub fn new(indices: Array2<u8>, palette: Palette) -> Result<Self> {
        if let Some(((row, col), index)) = indices
            .indexed_iter()
            .find(|(_, index)| usize::from(**index) >= palette.len())
        {
            return Err(invalid_parameter(
                "indices",
                &format!("{index} at ({row}, {col})"),
                &format!("palette has only {} colors", palette.len()),
            ));
        }

        Ok(Self::from_parts(indices, palette))
    }

    pub(crate) const fn from_parts(indices: Array2<u8>, palette: Palette) -> Self {
        Self { indices, palette }
    }

    /// Number of brick columns
    pub fn width(&self) -> usize {
        self.indices.ncols()
    }

    /// Number of brick rows
    pub fn height(&self) -> usize {
        self.indices.nrows()
    }

    /// Total number of bricks
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True for a grid without any bricks
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Palette the grid indexes into
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Raw palette indices, `(height, width)`
    pub const fn indices(&self) -> &Array2<u8> {
        &self.indices
    }

    /// Color of the brick at `(row, col)`
    pub fn color_at(&self, row: usize, col: usize) -> Option<&BrickColor> {
        self.indices
            .get((row, col))
            .and_then(|&index| self.palette.color(usize::from(index)))
    }

    /// All bricks in row-major order as `(row, col, color)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &BrickColor)> {
        self.indices
            .indexed_iter()
            .filter_map(|((row, col), &index)| {
                self.palette
                    .color(usize::from(index))
                    .map(|color| (row, col, color))
            })
    }

    /// Brick count per palette color, in palette order
    pub fn counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.palette.len()];
        for &index in &self.indices {
            if let Some(count) = counts.get_mut(usize::from(index)) {
                *count += 1;
            }
        }
        counts
    }

    /// Bill of materials covering every palette color, including unused ones
    pub fn bill_of_materials(&self) -> Vec<BrickCount> {
        self.palette
            .colors()
            .iter()
            .zip(self.counts())
            .enumerate()
            .map(|(position, (&color, count))| BrickCount {
                number: position + 1,
                color,
                count,
            })
            .collect()
    }

    /// Number of distinct colors actually used
    pub fn colors_used(&self) -> usize {
        self.counts().iter().filter(|&&count| count > 0).count()
    }

    /// Render the mosaic as an RGB image, one pixel per brick
    pub fn to_image(&self) -> RgbImage {
        let mut img = RgbImage::new(self.width() as u32, self.height() as u32);
        for (row, col, color) in self.cells() {
            img.put_pixel(col as u32, row as u32, Rgb(color.rgb));
        }
        img
    }
}
