//! Brick palette data and color matching
//!
//! The catalog table is the single source of truth for brick colors: the
//! quantizer matches against it and the spreadsheet export writes it out.

/// Built-in brick colors with their catalog codes
pub mod catalog;
/// Nearest-color search and whole-image quantization
pub mod quantize;

pub use catalog::{BRICK_COLORS, BrickColor};
pub use quantize::Palette;
