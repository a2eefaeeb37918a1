//! Segmentation result type

use crate::catalog::ElementRecord;
use std::fmt;

/// A word together with the elements that spell it, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation<'a> {
    word: String,
    elements: Vec<&'a ElementRecord>,
}

impl<'a> Segmentation<'a> {
    /// Pair a word with the elements that spell it
    pub const fn new(word: String, elements: Vec<&'a ElementRecord>) -> Self {
        Self { word, elements }
    }

    /// The (lowercased) word that was segmented
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Matched elements in word order
    pub fn elements(&self) -> &[&'a ElementRecord] {
        &self.elements
    }

    /// Number of matched elements
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Test if no elements were matched (only for the empty word)
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Matched symbols with their catalog casing
    pub fn symbols(&self) -> Vec<&'a str> {
        self.elements.iter().map(|element| element.symbol()).collect()
    }

    /// Concatenation of the lowercase symbols, equal to [`Self::word`]
    pub fn spelled(&self) -> String {
        self.elements.iter().map(|element| element.key()).collect()
    }
}

impl fmt::Display for Segmentation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}]", self.word, self.symbols().join(", "))
    }
}
