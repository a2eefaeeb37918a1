//! Segmentation strategy selection and batch segmentation

use crate::catalog::Catalog;
use crate::io::error::Result;
use crate::io::words::WordList;
use crate::segmentation::exhaustive::segment_exhaustive;
use crate::segmentation::greedy::segment_greedy;
use crate::segmentation::sequence::Segmentation;

/// How words are split into element symbols
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Longest symbol first, no backtracking
    #[default]
    Greedy,
    /// Backtracking search that finds a split whenever one exists
    Exhaustive,
}

impl Strategy {
    /// Segment a single word
    ///
    /// # Errors
    ///
    /// Returns [`crate::WriterError::NoMatchingElement`] if the word cannot
    /// be spelled under this strategy
    pub fn segment<'a>(self, catalog: &'a Catalog, word: &str) -> Result<Segmentation<'a>> {
        match self {
            Self::Greedy => segment_greedy(catalog, word),
            Self::Exhaustive => segment_exhaustive(catalog, word),
        }
    }
}

/// Segment every word of the list in order, stopping at the first failure
///
/// # Errors
///
/// Returns the error of the first word that cannot be spelled
pub fn segment_words<'a>(
    catalog: &'a Catalog,
    words: &WordList,
    strategy: Strategy,
) -> Result<Vec<Segmentation<'a>>> {
    words
        .iter()
        .map(|word| strategy.segment(catalog, word))
        .collect()
}
