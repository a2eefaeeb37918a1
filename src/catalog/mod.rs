//! Periodic table data: element records, the ordered catalog and its CSV loader

/// A single periodic table entry
pub mod element;
/// CSV catalog loading and record validation
pub mod loader;
/// Ordered element catalog used as the segmentation alphabet
pub mod table;

pub use element::ElementRecord;
pub use table::Catalog;
