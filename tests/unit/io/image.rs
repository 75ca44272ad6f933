//! Tests for dimension validation, resizing, previews and PNG output

#[cfg(test)]
mod tests {
    use brickmosaic::MosaicError;
    use brickmosaic::io::image::{
        Dimensions, load_image, mosaic_output_path, preview_output_path, resize_image, save_png,
        zoom_preview,
    };
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use std::path::{Path, PathBuf};

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x + y) * 5 % 256) as u8])
        })
    }

    // Tests valid dimensions are accepted
    // Verified by swapping width and height fields
    #[test]
    fn test_dimensions_valid() {
        let dimensions = Dimensions::new(48, 32);
        assert!(matches!(dimensions, Ok(d) if d.width() == 48 && d.height() == 32));
    }

    // Tests zero and negative sides are rejected
    // Verified by changing the positivity check to allow zero
    #[test]
    fn test_dimensions_reject_non_positive() {
        assert!(Dimensions::new(0, 10).is_err());
        assert!(Dimensions::new(10, 0).is_err());
        assert!(Dimensions::new(-4, 10).is_err());
        assert!(Dimensions::new(10, -4).is_err());
    }

    // Tests sides beyond worksheet limits are rejected
    // Verified by removing the column limit check
    #[test]
    fn test_dimensions_reject_oversized() {
        assert!(Dimensions::new(16_384, 1).is_ok());
        assert!(Dimensions::new(16_385, 1).is_err());
        assert!(Dimensions::new(1, 1_048_577).is_err());
        assert!(Dimensions::new(i64::MAX, 1).is_err());
    }

    // Tests text parsing trims whitespace and rejects non-integers
    // Verified by removing the trim call
    #[test]
    fn test_dimensions_parse() {
        assert!(matches!(Dimensions::parse(" 12 ", "8\n"), Ok(d) if d.width() == 12 && d.height() == 8));
        assert!(matches!(
            Dimensions::parse("twelve", "8"),
            Err(MosaicError::InvalidParameter {
                parameter: "width",
                ..
            })
        ));
        assert!(matches!(
            Dimensions::parse("12", "8.5"),
            Err(MosaicError::InvalidParameter {
                parameter: "height",
                ..
            })
        ));
    }

    // Tests resizing always produces exactly the requested size
    // Verified by passing height for both sides
    #[test]
    fn test_resize_exact_dimensions() {
        let source = gradient(37, 23);
        for (width, height) in [(1, 1), (5, 9), (37, 23), (80, 3), (100, 100)] {
            let Ok(dimensions) = Dimensions::new(width, height) else {
                unreachable!("test dimensions are valid");
            };
            let resized = resize_image(&source, dimensions);
            assert_eq!(resized.dimensions(), (width as u32, height as u32));
        }
    }

    // Tests resizing to the current size leaves pixels untouched
    // Verified by removing the same-size shortcut
    #[test]
    fn test_resize_same_size_is_identity() {
        let source = gradient(6, 4);
        let Ok(dimensions) = Dimensions::new(6, 4) else {
            unreachable!("test dimensions are valid");
        };
        assert_eq!(resize_image(&source, dimensions), source);
    }

    // Tests preview zoom repeats each pixel in a solid block
    // Verified by switching the preview filter to Lanczos
    #[test]
    fn test_zoom_preview_blocks() {
        let mut source = RgbImage::new(2, 1);
        source.put_pixel(0, 0, Rgb([255, 0, 0]));
        source.put_pixel(1, 0, Rgb([0, 0, 255]));

        let zoomed = zoom_preview(&source, 3);
        assert_eq!(zoomed.dimensions(), (6, 3));
        assert_eq!(zoomed.get_pixel(1, 1), &Rgb([255, 0, 0]));
        assert_eq!(zoomed.get_pixel(4, 1), &Rgb([0, 0, 255]));
    }

    // Tests output names sit next to the input with the mosaic suffix
    // Verified by keeping the input extension
    #[test]
    fn test_output_paths() {
        let input = Path::new("/photos/cat.jpeg");
        assert_eq!(
            mosaic_output_path(input),
            PathBuf::from("/photos/cat_legomosaic.png")
        );
        assert_eq!(
            preview_output_path(input),
            PathBuf::from("/photos/cat_legomosaic_preview.png")
        );
        assert_eq!(
            mosaic_output_path(Path::new("dog.png")),
            PathBuf::from("dog_legomosaic.png")
        );
    }

    // Tests saving and loading round-trips pixels and drops alpha
    // Verified by loading with to_rgba8
    #[test]
    fn test_save_and_load_png() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let rgba_path = dir.path().join("alpha.png");
        let rgba = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 0]));
        assert!(rgba.save(&rgba_path).is_ok());

        let loaded = load_image(&rgba_path);
        assert!(matches!(&loaded, Ok(img) if img.get_pixel(1, 1) == &Rgb([10, 20, 30])));

        let nested = dir.path().join("nested/deeper/out.png");
        let source = gradient(4, 4);
        assert!(save_png(&source, &nested).is_ok());
        assert!(matches!(load_image(&nested), Ok(img) if img == source));
    }

    // Tests loading a missing file reports the path
    // Verified by dropping the path from the error
    #[test]
    fn test_load_missing_image() {
        let result = load_image(Path::new("/definitely/not/here.png"));
        match result {
            Err(MosaicError::ImageLoad { path, .. }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.png"));
            }
            _ => unreachable!("Expected ImageLoad error"),
        }
    }
}
