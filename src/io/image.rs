//! PNG export of rendered canvases

use crate::io::error::{Result, WithPath, WriterError};
use image::RgbaImage;
use std::path::Path;

/// Save `image` as PNG at `output_path`, creating parent directories
///
/// An existing file at `output_path` is overwritten.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| WriterError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
