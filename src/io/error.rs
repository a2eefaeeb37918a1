//! Error types and context management for catalog, segmentation and rendering operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all writer operations
#[derive(Debug)]
pub enum WriterError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The element catalog file could not be parsed as CSV
    CatalogParse {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// A catalog record doesn't meet the catalog requirements
    InvalidCatalog {
        /// 1-based line number of the offending record
        line: u64,
        /// Description of what's wrong with the record
        reason: String,
    },

    /// The catalog file contained no element records
    EmptyCatalog {
        /// Path to the catalog file
        path: PathBuf,
    },

    /// No element symbol is a prefix of the remaining part of a word
    NoMatchingElement {
        /// The word being segmented
        word: String,
        /// Unmatched remainder of the word
        remainder: String,
        /// Byte offset of the remainder within the word
        offset: usize,
    },

    /// The embedded font has no glyph for a character
    MissingGlyph {
        /// Character without a glyph
        character: char,
        /// Text that was being drawn
        text: String,
    },

    /// Tile group does not fit on the canvas
    LayoutOverflow {
        /// Number of tiles requested
        tiles: usize,
        /// Size the tile group needs (width, height)
        required: (u32, u32),
        /// Size of the canvas (width, height)
        canvas: (u32, u32),
    },

    /// Rendering was requested for a segmentation without elements
    EmptyRender {
        /// Word whose segmentation was empty
        word: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for WriterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::CatalogParse { path, source } => {
                write!(f, "Failed to parse catalog '{}': {source}", path.display())
            }
            Self::InvalidCatalog { line, reason } => {
                write!(f, "Invalid catalog record on line {line}: {reason}")
            }
            Self::EmptyCatalog { path } => {
                write!(f, "Catalog '{}' contains no elements", path.display())
            }
            Self::NoMatchingElement {
                word,
                remainder,
                offset,
            } => {
                write!(
                    f,
                    "Invalid word '{word}': no element symbol matches '{remainder}' at offset {offset}"
                )
            }
            Self::MissingGlyph { character, text } => {
                write!(f, "No glyph for character {character:?} in text '{text}'")
            }
            Self::LayoutOverflow {
                tiles,
                required,
                canvas,
            } => {
                write!(
                    f,
                    "{tiles} tiles need {}x{} pixels but the canvas is {}x{}",
                    required.0, required.1, canvas.0, canvas.1
                )
            }
            Self::EmptyRender { word } => {
                write!(f, "Nothing to render for word '{word}'")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for WriterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::CatalogParse { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for writer results
pub type Result<T> = std::result::Result<T, WriterError>;

/// Attaches the path and operation to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into a [`WriterError::FileSystem`] naming the path
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| WriterError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for WriterError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WriterError {
    WriterError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid catalog record error
pub fn invalid_catalog(line: u64, reason: &impl ToString) -> WriterError {
    WriterError::InvalidCatalog {
        line,
        reason: reason.to_string(),
    }
}
