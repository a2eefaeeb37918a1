//! Canvas composition for a whole segmentation

use crate::io::configuration::BACKGROUND_COLOR;
use crate::io::error::{Result, WriterError};
use crate::io::image::export_png;
use crate::render::layout::TileLayout;
use crate::render::tile::draw_tile;
use crate::segmentation::Segmentation;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Draw one tile per matched element on a fresh canvas
///
/// # Errors
///
/// Returns an error if:
/// - The segmentation has no elements
/// - The tile row doesn't fit the canvas
/// - A label contains a character without a glyph
pub fn render_segmentation(
    segmentation: &Segmentation<'_>,
    layout: &TileLayout,
) -> Result<RgbaImage> {
    if segmentation.is_empty() {
        return Err(WriterError::EmptyRender {
            word: segmentation.word().to_string(),
        });
    }

    let rects = layout.tile_rects(segmentation.len())?;
    let mut image = RgbaImage::from_pixel(
        layout.canvas_width,
        layout.canvas_height,
        Rgba(BACKGROUND_COLOR),
    );

    for (rect, element) in rects.into_iter().zip(segmentation.elements()) {
        draw_tile(&mut image, rect, element)?;
    }

    Ok(image)
}

/// Render a segmentation and write it as PNG, replacing any existing file
///
/// # Errors
///
/// Returns an error if rendering or export fails
pub fn render_to_file(
    segmentation: &Segmentation<'_>,
    layout: &TileLayout,
    output_path: &Path,
) -> Result<()> {
    let image = render_segmentation(segmentation, layout)?;
    export_png(&image, output_path)?;
    log::info!(
        "Rendered '{}' ({} tiles) to '{}'",
        segmentation.word(),
        segmentation.len(),
        output_path.display()
    );
    Ok(())
}
