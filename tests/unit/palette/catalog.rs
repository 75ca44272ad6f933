//! Tests for the brick color catalog

#[cfg(test)]
mod tests {
    use brickmosaic::palette::catalog::{BRICK_COLOR_COUNT, BRICK_COLORS, BrickColor, html_notation};
    use std::collections::HashSet;

    // Tests the catalog holds forty entries
    // Verified by removing the last entry
    #[test]
    fn test_catalog_size() {
        assert_eq!(BRICK_COLORS.len(), BRICK_COLOR_COUNT);
        assert_eq!(BRICK_COLOR_COUNT, 40);
    }

    // Tests catalog codes and colors are unique
    // Verified by duplicating a catalog code
    #[test]
    fn test_catalog_entries_unique() {
        let codes: HashSet<&str> = BRICK_COLORS.iter().map(|c| c.code).collect();
        let colors: HashSet<[u8; 3]> = BRICK_COLORS.iter().map(|c| c.rgb).collect();
        assert_eq!(codes.len(), BRICK_COLORS.len());
        assert_eq!(colors.len(), BRICK_COLORS.len());
    }

    // Tests a few anchor entries keep their codes and colors
    // Verified by swapping two entries
    #[test]
    fn test_catalog_anchor_entries() {
        assert_eq!(BRICK_COLORS.first(), Some(&BrickColor::new("307001", [217, 218, 220])));
        assert_eq!(BRICK_COLORS.get(4).map(BrickColor::hex).as_deref(), Some("b6a36f"));
        assert_eq!(BRICK_COLORS.get(21).map(|c| c.code), Some("6133726"));
        assert_eq!(BRICK_COLORS.last().map(BrickColor::hex).as_deref(), Some("b75a17"));
    }

    // Tests hex notation is lowercase, zero padded and matches the RGB triple
    // Verified by formatting with uppercase digits
    #[test]
    fn test_hex_matches_rgb() {
        for color in &BRICK_COLORS {
            let hex = color.hex();
            assert_eq!(hex.len(), 6);
            assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));

            let parsed: Vec<u8> = (0..3)
                .filter_map(|i| hex.get(i * 2..i * 2 + 2))
                .filter_map(|pair| u8::from_str_radix(pair, 16).ok())
                .collect();
            assert_eq!(parsed, color.rgb.to_vec());
            assert_eq!(color.html(), format!("#{hex}"));
        }
    }

    // Tests HTML notation pads small components
    // Verified by dropping the zero padding
    #[test]
    fn test_html_notation_padding() {
        assert_eq!(html_notation([223, 223, 5]), "#dfdf05");
        assert_eq!(html_notation([0, 0, 0]), "#000000");
        assert_eq!(html_notation([255, 255, 255]), "#ffffff");
    }
}
