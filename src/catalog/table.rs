//! Ordered element catalog used as the segmentation alphabet

use crate::catalog::element::ElementRecord;
use crate::io::error::{Result, invalid_catalog};
use std::cmp::Reverse;
use std::collections::HashSet;

/// Elements ordered longest symbol first
///
/// Records with equal symbol length keep the order they were given in, which
/// decides ties when several symbols of the same length match a prefix.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    elements: Vec<ElementRecord>,
}

impl Catalog {
    /// Build a catalog, stable-sorting records by descending symbol length
    ///
    /// # Errors
    ///
    /// Returns [`crate::WriterError::InvalidCatalog`] naming the 1-based
    /// record position if a symbol is not 1 to 3 ASCII letters
    pub fn from_records(mut elements: Vec<ElementRecord>) -> Result<Self> {
        for (index, element) in elements.iter().enumerate() {
            element
                .validate_symbol()
                .map_err(|reason| invalid_catalog(index as u64 + 1, &reason))?;
        }

        elements.sort_by_key(|element| Reverse(element.symbol_len()));

        let mut seen = HashSet::with_capacity(elements.len());
        for element in &elements {
            if !seen.insert(element.key()) {
                log::warn!(
                    "Duplicate symbol '{}' ({}); the earlier entry wins",
                    element.symbol(),
                    element.name()
                );
            }
        }

        Ok(Self { elements })
    }

    /// Elements in matching order
    pub fn elements(&self) -> &[ElementRecord] {
        &self.elements
    }

    /// Iterate elements in matching order
    pub fn iter(&self) -> std::slice::Iter<'_, ElementRecord> {
        self.elements.iter()
    }

    /// Number of elements
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Test if the catalog holds no elements
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements whose symbol is a prefix of `text`, in matching order
    ///
    /// `text` must already be lowercase.
    pub fn prefix_matches<'a>(&'a self, text: &str) -> impl Iterator<Item = &'a ElementRecord> {
        self.elements
            .iter()
            .filter(move |element| text.starts_with(element.key()))
    }

    /// First element in matching order whose symbol is a prefix of `text`
    pub fn first_prefix_match(&self, text: &str) -> Option<&ElementRecord> {
        self.prefix_matches(text).next()
    }

    /// Look up an element by symbol, ignoring case
    pub fn find(&self, symbol: &str) -> Option<&ElementRecord> {
        let key = symbol.to_lowercase();
        self.elements.iter().find(|element| element.key() == key)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ElementRecord;
    type IntoIter = std::slice::Iter<'a, ElementRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
