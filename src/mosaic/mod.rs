//! Quantized mosaic representation

/// Palette-index grid with per-color brick counts
pub mod grid;

pub use grid::{BrickCount, MosaicGrid};
