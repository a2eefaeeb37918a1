//! Tile rendering for segmented words

/// Canvas composition for a whole segmentation
pub mod canvas;
/// Embedded bitmap font
pub mod font;
/// Tile placement on the canvas
pub mod layout;
/// Drawing of a single element tile
pub mod tile;

pub use layout::{Rect, TileLayout};
