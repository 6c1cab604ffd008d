//! Tests for decoding sources and writing finished collages

#[cfg(test)]
mod tests {
    use crate::coordinate_raster;
    use image::{Rgb, RgbImage};
    use std::fs;
    use tempfile::TempDir;
    use tilecollage::CollageError;
    use tilecollage::io::configuration::JPEG_QUALITY;
    use tilecollage::io::image::{load_source_image, save_canvas};

    // Tests a written PNG loads back with its size and pixels
    // Verified by converting loaded images to greyscale
    #[test]
    fn test_png_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("raster.png");
        let canvas = coordinate_raster(48, 20);

        save_canvas(&canvas, &path, JPEG_QUALITY).unwrap();
        let image = load_source_image(&path).unwrap();

        assert_eq!((image.width(), image.height()), (48, 20));
        assert_eq!(image.path(), path.as_path());
        assert_eq!(image.pixels().get_pixel(7, 3), &Rgb([7, 3, 0]));
    }

    // Tests JPEG output keeps its size and creates missing directories
    // Verified by skipping directory creation
    #[test]
    fn test_jpeg_save_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/deeper/collage.jpg");
        let canvas = RgbImage::from_pixel(64, 40, Rgb([45, 36, 36]));

        save_canvas(&canvas, &path, JPEG_QUALITY).unwrap();

        let reloaded = image::open(&path).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (64, 40));
    }

    // Tests loading a missing file reports the path
    // Verified by returning a generic file system error
    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.png");

        match load_source_image(&path) {
            Err(CollageError::ImageLoad { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected ImageLoad error, got {other:?}"),
        }
    }

    // Tests undecodable content is rejected
    // Verified by accepting any file with an image extension
    #[test]
    fn test_load_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrupt.png");
        fs::write(&path, "definitely not a png").unwrap();

        assert!(matches!(
            load_source_image(&path),
            Err(CollageError::ImageLoad { .. })
        ));
    }

    // Tests an unknown output extension is an export error
    // Verified by falling back to PNG for unknown extensions
    #[test]
    fn test_save_unknown_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("collage.unknownformat");
        let canvas = RgbImage::new(4, 4);

        assert!(matches!(
            save_canvas(&canvas, &path, JPEG_QUALITY),
            Err(CollageError::ImageExport { .. })
        ));
    }
}
