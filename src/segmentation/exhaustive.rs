//! Memoized depth-first segmentation
//!
//! Tries candidate symbols in catalog order and backtracks on failure, so the
//! first split found is the greedy one whenever greedy succeeds. Offsets from
//! which the rest of the word cannot be spelled are recorded in a bitset and
//! never explored twice, which bounds the search by `word.len() * catalog.len()`.

use crate::catalog::{Catalog, ElementRecord};
use crate::io::error::{Result, WriterError};
use crate::segmentation::sequence::Segmentation;
use bitvec::prelude::*;

/// Byte offsets of a word from which no segmentation of the remainder exists
#[derive(Debug, Clone)]
pub struct DeadEnds {
    bits: BitVec,
}

impl DeadEnds {
    /// Track offsets `0..=word_len`
    pub fn new(word_len: usize) -> Self {
        Self {
            bits: bitvec![0; word_len + 1],
        }
    }

    /// Record that `offset` cannot be completed
    pub fn mark(&mut self, offset: usize) {
        if offset < self.bits.len() {
            self.bits.set(offset, true);
        }
    }

    /// Test whether `offset` is known to be a dead end
    pub fn contains(&self, offset: usize) -> bool {
        self.bits.get(offset).as_deref() == Some(&true)
    }

    /// Number of recorded dead ends
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}

// Position in the word and the catalog index to resume scanning from
#[derive(Debug, Clone, Copy)]
struct Frame {
    offset: usize,
    next_candidate: usize,
}

impl Frame {
    const fn at(offset: usize) -> Self {
        Self {
            offset,
            next_candidate: 0,
        }
    }
}

struct Search<'a, 'w> {
    catalog: &'a Catalog,
    word: &'w str,
    dead_ends: DeadEnds,
    deepest: usize,
}

impl<'a> Search<'a, '_> {
    // Depth-first over an explicit stack; `path` holds one element per frame
    // below the top, so stack depth never depends on word length
    fn run(&mut self, path: &mut Vec<&'a ElementRecord>) -> bool {
        let word = self.word;
        let catalog = self.catalog;
        let elements = catalog.elements();
        let mut frames = vec![Frame::at(0)];

        while let Some(frame) = frames.last_mut() {
            let offset = frame.offset;
            let Some(rest) = word.get(offset..) else {
                frames.pop();
                path.pop();
                continue;
            };
            if rest.is_empty() {
                return true;
            }

            let candidate = if self.dead_ends.contains(offset) {
                None
            } else {
                self.deepest = self.deepest.max(offset);
                elements
                    .iter()
                    .enumerate()
                    .skip(frame.next_candidate)
                    .find(|(_, element)| rest.starts_with(element.key()))
            };

            if let Some((index, element)) = candidate {
                frame.next_candidate = index + 1;
                path.push(element);
                frames.push(Frame::at(offset + element.key().len()));
            } else {
                self.dead_ends.mark(offset);
                frames.pop();
                path.pop();
            }
        }

        false
    }
}

/// Segment `word` with backtracking, matching case-insensitively
///
/// # Errors
///
/// Returns [`WriterError::NoMatchingElement`] when no segmentation exists; the
/// reported remainder starts at the furthest offset the search reached
pub fn segment_exhaustive<'a>(catalog: &'a Catalog, word: &str) -> Result<Segmentation<'a>> {
    let word = word.to_lowercase();
    let mut path = Vec::new();

    let mut search = Search {
        catalog,
        word: &word,
        dead_ends: DeadEnds::new(word.len()),
        deepest: 0,
    };
    let found = search.run(&mut path);
    let deepest = search.deepest;
    log::debug!(
        "Exhaustive search of '{word}' recorded {} dead ends",
        search.dead_ends.count()
    );

    if found {
        return Ok(Segmentation::new(word, path));
    }

    Err(WriterError::NoMatchingElement {
        remainder: word.get(deepest..).unwrap_or_default().to_string(),
        word,
        offset: deepest,
    })
}
