//! Drawing of a single element tile
//!
//! A tile is a filled frame with four labels inside the padded content area:
//! atomic number top-left, symbol centered below it, name centered under the
//! symbol and atomic mass centered along the bottom edge.

use crate::catalog::ElementRecord;
use crate::io::configuration::{
    BORDER_COLOR, MASS_SCALE, NAME_SCALE, NAME_SPACING, NUMBER_SCALE, SYMBOL_SCALE, TEXT_COLOR,
    TILE_BORDER, TILE_FILL_COLOR, TILE_PADDING,
};
use crate::io::error::Result;
use crate::render::font::{draw_text, text_height, text_width};
use crate::render::layout::Rect;
use image::{Rgba, RgbaImage};

/// Top-left positions of the four labels of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelPositions {
    /// Atomic number
    pub number: (i64, i64),
    /// Element symbol
    pub symbol: (i64, i64),
    /// Element name
    pub name: (i64, i64),
    /// Atomic mass
    pub mass: (i64, i64),
}

/// Area inside the frame and padding where labels are drawn
pub const fn content_area(tile: Rect) -> Rect {
    tile.inset(TILE_BORDER + TILE_PADDING)
}

/// Compute label positions for `element` inside `tile`
pub fn label_positions(tile: Rect, element: &ElementRecord) -> LabelPositions {
    let content = content_area(tile);
    let left = i64::from(content.x);
    let top = i64::from(content.y);
    let bottom = i64::from(content.bottom());

    let symbol_top = top + i64::from(text_height(NUMBER_SCALE) + NAME_SPACING);
    let name_top = symbol_top + i64::from(text_height(SYMBOL_SCALE) + NAME_SPACING);
    let mass_top = bottom - i64::from(text_height(MASS_SCALE));

    LabelPositions {
        number: (left, top),
        symbol: (centered(content, element.symbol(), SYMBOL_SCALE), symbol_top),
        name: (centered(content, element.name(), NAME_SCALE), name_top),
        mass: (centered(content, element.atomic_mass(), MASS_SCALE), mass_top),
    }
}

// Left edge that centers `text` in `area`; negative offsets are clipped later
fn centered(area: Rect, text: &str, scale: u32) -> i64 {
    let slack = i64::from(area.width) - i64::from(text_width(text, scale));
    i64::from(area.x) + slack / 2
}

/// Draw the frame and labels of `element` into `tile`
///
/// # Errors
///
/// Returns [`crate::WriterError::MissingGlyph`] if a label contains a
/// character the embedded font doesn't cover
pub fn draw_tile(image: &mut RgbaImage, tile: Rect, element: &ElementRecord) -> Result<()> {
    fill_rect(image, tile, Rgba(BORDER_COLOR));
    fill_rect(image, tile.inset(TILE_BORDER), Rgba(TILE_FILL_COLOR));

    let clip = content_area(tile);
    let color = Rgba(TEXT_COLOR);
    let positions = label_positions(tile, element);

    draw_text(
        image,
        element.atomic_number(),
        positions.number,
        NUMBER_SCALE,
        color,
        clip,
    )?;
    draw_text(
        image,
        element.symbol(),
        positions.symbol,
        SYMBOL_SCALE,
        color,
        clip,
    )?;
    draw_text(
        image,
        element.name(),
        positions.name,
        NAME_SCALE,
        color,
        clip,
    )?;
    draw_text(
        image,
        element.atomic_mass(),
        positions.mass,
        MASS_SCALE,
        color,
        clip,
    )?;

    Ok(())
}

/// Fill `rect` with `color`, ignoring any part outside the image
pub fn fill_rect(image: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let right = rect.right().min(image.width());
    let bottom = rect.bottom().min(image.height());
    for y in rect.y..bottom {
        for x in rect.x..right {
            image.put_pixel(x, y, color);
        }
    }
}
