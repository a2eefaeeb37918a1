//! Newline-delimited word list input

use crate::io::error::{Result, WithPath};
use std::path::Path;

/// Words to spell, trimmed and lowercased, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Read the word list at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read as UTF-8 text
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_path(path, "read word list")?;
        let list = Self::parse(&text);
        log::debug!("Loaded {} words from '{}'", list.len(), path.display());
        Ok(list)
    }

    /// Split text into words, one per line, skipping blank lines
    pub fn parse(text: &str) -> Self {
        let words = text
            .lines()
            .map(normalize_word)
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Word at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Iterate words in file order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of words
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Test if the list holds no words
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|word| normalize_word(&word.into()))
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }
}

/// Trim surrounding whitespace and lowercase a word
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}
