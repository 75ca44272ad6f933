//! Nearest-color quantization against a brick palette

use crate::io::configuration::MAX_PALETTE_SIZE;
use crate::io::error::{Result, invalid_parameter};
use crate::mosaic::MosaicGrid;
use crate::palette::catalog::{BRICK_COLORS, BrickColor};
use image::RgbImage;
use ndarray::Array2;

/// Ordered, non-empty set of colors a mosaic may use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<BrickColor>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::bricks()
    }
}

impl Palette {
    /// Build a palette from an ordered list of colors
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or holds more colors than a
    /// mosaic grid can index
    pub fn new(colors: &[BrickColor]) -> Result<Self> {
        if colors.is_empty() {
            return Err(invalid_parameter(
                "palette",
                &0,
                &"palette must contain at least one color",
            ));
        }
        if colors.len() > MAX_PALETTE_SIZE {
            return Err(invalid_parameter(
                "palette",
                &colors.len(),
                &format!("palette may contain at most {MAX_PALETTE_SIZE} colors"),
            ));
        }

        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// The built-in brick palette
    pub fn bricks() -> Self {
        Self {
            colors: BRICK_COLORS.to_vec(),
        }
    }

    /// Colors in palette order
    pub fn colors(&self) -> &[BrickColor] {
        &self.colors
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for palettes built through [`Palette::new`]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at a palette position
    pub fn color(&self, index: usize) -> Option<&BrickColor> {
        self.colors.get(index)
    }

    /// Position of the color closest to `rgb` in Euclidean RGB distance
    ///
    /// When several colors are equally close the earliest one wins.
    pub fn nearest_index(&self, rgb: [u8; 3]) -> usize {
        let mut best_index = 0;
        let mut best_distance = u32::MAX;

        for (index, color) in self.colors.iter().enumerate() {
            let distance = distance_squared(color.rgb, rgb);
            // Strict comparison keeps the first of equidistant colors
            if distance < best_distance {
                best_index = index;
                best_distance = distance;
            }
        }

        best_index
    }

    /// Color closest to `rgb`
    ///
    /// Always `Some` for palettes built through [`Palette::new`] or
    /// [`Palette::bricks`].
    pub fn nearest(&self, rgb: [u8; 3]) -> Option<&BrickColor> {
        self.color(self.nearest_index(rgb))
    }

    /// Replace every pixel of `image` with its nearest palette color
    pub fn quantize_image(&self, image: &RgbImage) -> MosaicGrid {
        self.quantize_image_with_progress(image, |_| {})
    }

    /// Quantize `image`, calling `on_row` after each finished row
    pub fn quantize_image_with_progress<F>(&self, image: &RgbImage, mut on_row: F) -> MosaicGrid
    where
        F: FnMut(usize),
    {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let mut indices = Array2::<u8>::zeros((height, width));

        for (row, pixels) in image.rows().enumerate() {
            for (col, pixel) in pixels.enumerate() {
                if let Some(cell) = indices.get_mut((row, col)) {
                    // Palette size is capped at MAX_PALETTE_SIZE so the index fits
                    *cell = self.nearest_index(pixel.0) as u8;
                }
            }
            on_row(row);
        }

        MosaicGrid::from_parts(indices, self.clone())
    }
}

/// Squared Euclidean distance between two RGB triples
///
/// Ranks colors identically to the true Euclidean distance without a square root.
pub fn distance_squared(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let diff = i32::from(x) - i32::from(y);
            diff.unsigned_abs() * diff.unsigned_abs()
        })
        .sum()
}
