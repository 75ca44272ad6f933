//! Brick color catalog
//!
//! Each entry pairs a catalog code used for ordering parts with the RGB value
//! of the brick. Hex notation is always derived from the RGB triple, so the
//! colors written to a spreadsheet cannot drift from the colors matched
//! during quantization.

/// A single brick color available for mosaics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BrickColor {
    /// Catalog code used when ordering the part
    pub code: &'static str,
    /// Color components in red, green, blue order
    pub rgb: [u8; 3],
}

impl BrickColor {
    /// Create a catalog entry
    pub const fn new(code: &'static str, rgb: [u8; 3]) -> Self {
        Self { code, rgb }
    }

    /// Lowercase hex notation without the leading `#` (`d9dadc`)
    pub fn hex(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("{r:02x}{g:02x}{b:02x}")
    }

    /// Lowercase HTML notation with the leading `#` (`#d9dadc`)
    pub fn html(&self) -> String {
        html_notation(self.rgb)
    }
}

/// Format an RGB triple as lowercase `#rrggbb`
pub fn html_notation(rgb: [u8; 3]) -> String {
    let [r, g, b] = rgb;
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Number of colors in the built-in brick palette
pub const BRICK_COLOR_COUNT: usize = 40;

/// The built-in brick palette in catalog order
///
/// Order matters: quantization ties resolve to the earliest entry and the
/// spreadsheet numbers rows in this order.
pub const BRICK_COLORS: [BrickColor; BRICK_COLOR_COUNT] = [
    BrickColor::new("307001", [217, 218, 220]),
    BrickColor::new("307021", [190, 6, 6]),
    BrickColor::new("307024", [246, 197, 0]),
    BrickColor::new("307026", [48, 48, 48]),
    BrickColor::new("4125253", [182, 163, 111]),
    BrickColor::new("4206330", [37, 98, 179]),
    BrickColor::new("4210848", [102, 102, 102]),
    BrickColor::new("4211288", [88, 43, 23]),
    BrickColor::new("4211415", [147, 147, 147]),
    BrickColor::new("4527526", [118, 154, 206]),
    BrickColor::new("4537251", [152, 191, 67]),
    BrickColor::new("4550169", [111, 39, 50]),
    BrickColor::new("4558593", [48, 162, 81]),
    BrickColor::new("4558595", [221, 126, 42]),
    BrickColor::new("4631385", [37, 62, 103]),
    BrickColor::new("4655243", [97, 163, 186]),
    BrickColor::new("6055171", [53, 83, 59]),
    BrickColor::new("6055172", [136, 121, 100]),
    BrickColor::new("6065504", [243, 157, 48]),
    BrickColor::new("6097301", [141, 98, 163]),
    BrickColor::new("6099364", [142, 60, 124]),
    BrickColor::new("6133726", [216, 55, 161]),
    BrickColor::new("6138232", [123, 133, 142]),
    BrickColor::new("6143431", [138, 78, 49]),
    BrickColor::new("6151658", [54, 133, 175]),
    BrickColor::new("6167457", [92, 67, 148]),
    BrickColor::new("6172375", [89, 175, 68]),
    BrickColor::new("6177146", [133, 96, 67]),
    BrickColor::new("6211403", [180, 143, 194]),
    BrickColor::new("6213782", [30, 143, 139]),
    BrickColor::new("6223913", [118, 158, 132]),
    BrickColor::new("6251846", [186, 211, 205]),
    BrickColor::new("6251940", [239, 151, 199]),
    BrickColor::new("6275876", [254, 100, 136]),
    BrickColor::new("6275877", [253, 226, 111]),
    BrickColor::new("6304896", [187, 200, 130]),
    BrickColor::new("6316569", [159, 185, 221]),
    BrickColor::new("6376232", [223, 223, 5]),
    BrickColor::new("6419170", [192, 131, 92]),
    BrickColor::new("6475042", [183, 90, 23]),
];
