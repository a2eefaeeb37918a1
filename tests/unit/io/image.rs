//! Tests for PNG export including directory creation and overwriting

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use periodic_writer::WriterError;
    use periodic_writer::io::image::export_png;
    use std::fs;
    use tempfile::TempDir;

    // Tests PNG file creation in a missing directory
    // Verified by disabling directory creation
    #[test]
    fn test_export_png_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("a").join("b").join("tiles.png");
        let image = RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 255]));

        export_png(&image, &output).unwrap();

        let reloaded = image::open(&output).unwrap().to_rgba8();
        assert_eq!(reloaded.dimensions(), (4, 3));
        assert_eq!(*reloaded.get_pixel(1, 1), Rgba([10, 20, 30, 255]));
    }

    // Tests existing files are replaced
    #[test]
    fn test_export_png_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("output.png");
        fs::write(&output, "stale").unwrap();

        export_png(&RgbaImage::new(2, 2), &output).unwrap();

        assert!(image::open(&output).is_ok());
    }

    // Tests a directory in place of the output file is reported
    #[test]
    fn test_export_png_into_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = export_png(&RgbaImage::new(2, 2), temp_dir.path());

        assert!(matches!(result, Err(WriterError::ImageExport { .. })));
    }
}
