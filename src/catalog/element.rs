//! A single periodic table entry

use crate::io::configuration::MAX_SYMBOL_LENGTH;
use std::fmt;

/// One element as read from the catalog
///
/// All fields are kept as the catalog spells them. The lowercase symbol used
/// for matching is derived once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRecord {
    atomic_number: String,
    name: String,
    symbol: String,
    atomic_mass: String,
    key: String,
}

impl ElementRecord {
    /// Create a record, deriving the lowercase matching key from `symbol`
    pub fn new(
        atomic_number: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        atomic_mass: impl Into<String>,
    ) -> Self {
        let symbol = symbol.into();
        let key = symbol.to_lowercase();
        Self {
            atomic_number: atomic_number.into(),
            name: name.into(),
            symbol,
            atomic_mass: atomic_mass.into(),
            key,
        }
    }

    /// Atomic number as written in the catalog
    pub fn atomic_number(&self) -> &str {
        &self.atomic_number
    }

    /// Element name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Symbol with its catalog casing, e.g. `Ge`
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Atomic mass as written in the catalog
    pub fn atomic_mass(&self) -> &str {
        &self.atomic_mass
    }

    /// Lowercase symbol used for prefix matching
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Symbol length in characters
    pub fn symbol_len(&self) -> usize {
        self.symbol.chars().count()
    }

    /// Check the symbol is 1 to [`MAX_SYMBOL_LENGTH`] ASCII letters
    ///
    /// # Errors
    ///
    /// Returns a description of the first rule the symbol breaks
    pub fn validate_symbol(&self) -> std::result::Result<(), String> {
        validate_symbol(&self.symbol)
    }
}

/// Check `symbol` is 1 to [`MAX_SYMBOL_LENGTH`] ASCII letters
///
/// # Errors
///
/// Returns a description of the first rule the symbol breaks
pub fn validate_symbol(symbol: &str) -> std::result::Result<(), String> {
    if symbol.is_empty() {
        return Err("symbol is empty".to_string());
    }
    if !symbol.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(format!("symbol '{symbol}' must contain only ASCII letters"));
    }
    if symbol.len() > MAX_SYMBOL_LENGTH {
        return Err(format!(
            "symbol '{symbol}' is longer than {MAX_SYMBOL_LENGTH} letters"
        ));
    }
    Ok(())
}

impl fmt::Display for ElementRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.symbol, self.name, self.atomic_number)
    }
}
