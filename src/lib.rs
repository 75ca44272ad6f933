//! Brick mosaic generation from photographs
//!
//! A source image is resized to the requested brick dimensions, every pixel is
//! snapped to the nearest color of a fixed toy-brick palette, and the result is
//! written out as a PNG plus a spreadsheet holding the color grid, the catalog
//! code of every brick and a per-color bill of materials.

#![forbid(unsafe_code)]

/// Terminal front-end, file formats and error handling
pub mod io;
/// Mosaic grid of palette indices and brick counts
pub mod mosaic;
/// Brick color catalog and nearest-color quantization
pub mod palette;

pub use io::error::{MosaicError, Result};
