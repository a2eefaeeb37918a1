//! Word segmentation into element symbols
//!
//! This module contains:
//! - The greedy longest-symbol-first segmenter
//! - An opt-in backtracking segmenter that finds a split whenever one exists
//! - The segmentation result type and strategy selection

/// Memoized depth-first segmentation
pub mod exhaustive;
/// Greedy, non-backtracking segmentation
pub mod greedy;
/// Segmentation result type
pub mod sequence;
/// Strategy selection and batch segmentation
pub mod strategy;

pub use sequence::Segmentation;
pub use strategy::Strategy;
