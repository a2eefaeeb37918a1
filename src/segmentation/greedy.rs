//! Greedy, non-backtracking segmentation
//!
//! At each step the first catalog element (longest symbol first, then catalog
//! order) whose symbol prefixes the rest of the word is taken. A choice is never
//! revisited, so some spellable words are rejected; see
//! [`crate::segmentation::exhaustive`] for the complete search.

use crate::catalog::Catalog;
use crate::io::error::{Result, WriterError};
use crate::segmentation::sequence::Segmentation;

/// Segment `word` greedily, matching case-insensitively
///
/// # Errors
///
/// Returns [`WriterError::NoMatchingElement`] when no symbol prefixes the
/// remaining part of the word
pub fn segment_greedy<'a>(catalog: &'a Catalog, word: &str) -> Result<Segmentation<'a>> {
    let word = word.to_lowercase();
    let mut elements = Vec::new();
    let mut offset = 0;

    while let Some(rest) = word.get(offset..).filter(|rest| !rest.is_empty()) {
        let Some(element) = catalog.first_prefix_match(rest) else {
            log::debug!("No element matches '{rest}' at offset {offset} of '{word}'");
            return Err(WriterError::NoMatchingElement {
                remainder: rest.to_string(),
                word,
                offset,
            });
        };

        elements.push(element);
        offset += element.key().len();
    }

    Ok(Segmentation::new(word, elements))
}
