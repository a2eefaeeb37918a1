//! Spell words with periodic table element symbols and render them as tiles
//!
//! Words are split greedily into element symbols, longest symbol first, and
//! the matched elements are drawn as labeled tiles on a PNG canvas.

#![forbid(unsafe_code)]

/// Element records, the ordered catalog and its CSV loader
pub mod catalog;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tile layout, bitmap font and canvas composition
pub mod render;
/// Greedy and exhaustive word segmentation
pub mod segmentation;

pub use io::error::{Result, WriterError};
