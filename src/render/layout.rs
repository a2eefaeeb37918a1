//! Tile placement on a fixed-size canvas
//!
//! Tiles sit on a single row. The row is centered horizontally and vertically
//! as a group, so its width is `k * tile_width + (k - 1) * gap` for `k` tiles.

use crate::io::configuration::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, MAX_CANVAS_DIMENSION, TILE_GAP, TILE_HEIGHT,
    TILE_WIDTH,
};
use crate::io::error::{Result, WriterError, invalid_parameter};

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the rightmost column
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// One past the bottom row
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Test whether a (possibly negative) point lies inside
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= i64::from(self.x)
            && y >= i64::from(self.y)
            && x < i64::from(self.right())
            && y < i64::from(self.bottom())
    }

    /// Shrink by `amount` on every side, collapsing to zero size when too small
    #[must_use]
    pub const fn inset(&self, amount: u32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: self.width.saturating_sub(amount * 2),
            height: self.height.saturating_sub(amount * 2),
        }
    }
}

/// Canvas and tile geometry used to place a row of tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Width of each tile
    pub tile_width: u32,
    /// Height of each tile
    pub tile_height: u32,
    /// Gap between neighbouring tiles
    pub gap: u32,
}

impl Default for TileLayout {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
            gap: TILE_GAP,
        }
    }
}

impl TileLayout {
    /// Default tile geometry on a canvas of the given size
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_CANVAS_DIMENSION`]
    pub fn with_canvas(width: u32, height: u32) -> Result<Self> {
        for (parameter, value) in [("width", width), ("height", height)] {
            if value == 0 || value > MAX_CANVAS_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_CANVAS_DIMENSION}"),
                ));
            }
        }

        Ok(Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::default()
        })
    }

    /// Total width of a row of `tiles` tiles including the gaps between them
    pub fn group_width(&self, tiles: usize) -> u64 {
        let count = tiles as u64;
        if count == 0 {
            return 0;
        }
        count * u64::from(self.tile_width) + (count - 1) * u64::from(self.gap)
    }

    /// Place `tiles` tiles, left to right, centered on the canvas
    ///
    /// # Errors
    ///
    /// Returns [`WriterError::LayoutOverflow`] if the row is wider or taller
    /// than the canvas
    pub fn tile_rects(&self, tiles: usize) -> Result<Vec<Rect>> {
        let group_width = self.group_width(tiles);
        if group_width > u64::from(self.canvas_width) || self.tile_height > self.canvas_height {
            return Err(WriterError::LayoutOverflow {
                tiles,
                required: (
                    u32::try_from(group_width).unwrap_or(u32::MAX),
                    self.tile_height,
                ),
                canvas: (self.canvas_width, self.canvas_height),
            });
        }

        // group_width fits in u32 after the check above
        let left = (self.canvas_width - group_width as u32) / 2;
        let top = (self.canvas_height - self.tile_height) / 2;
        let stride = self.tile_width + self.gap;

        Ok((0..tiles as u32)
            .map(|index| Rect::new(left + index * stride, top, self.tile_width, self.tile_height))
            .collect())
    }

    /// Rectangle covering the whole canvas
    pub const fn canvas(&self) -> Rect {
        Rect::new(0, 0, self.canvas_width, self.canvas_height)
    }
}
