//! Input/output operations: command line, configuration, errors and file formats

/// Command-line interface and run orchestration
pub mod cli;
/// Default paths, tile geometry and palette
pub mod configuration;
/// Error type and context helpers
pub mod error;
/// PNG export
pub mod image;
/// Batch progress reporting
pub mod progress;
/// Word list loading and normalization
pub mod words;
