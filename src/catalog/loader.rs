//! Element catalog loading from headerless CSV
//!
//! Each record carries `number, name, symbol, mass` followed by at least one
//! more field that is ignored. Fields are trimmed and blank lines skipped.

use crate::catalog::element::{ElementRecord, validate_symbol};
use crate::catalog::table::Catalog;
use crate::io::configuration::CATALOG_FIELD_COUNT;
use crate::io::error::{Result, WithPath, WriterError, invalid_catalog};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// Load and sort the element catalog at `path`
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file is not valid CSV
/// - A record has too few fields or an invalid symbol
/// - The file contains no records
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let file = File::open(path).with_path(path, "open catalog")?;
    let catalog = parse_catalog(file, path)?;
    log::debug!(
        "Loaded {} elements from '{}'",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Parse catalog records from any reader
///
/// `source` is only used in error messages.
///
/// # Errors
///
/// Same conditions as [`load_catalog`], minus opening the file
pub fn parse_catalog<R: std::io::Read>(reader: R, source: &Path) -> Result<Catalog> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|source_error| WriterError::CatalogParse {
            path: source.to_path_buf(),
            source: source_error,
        })?;

        if is_blank(&record) {
            continue;
        }

        let line = record
            .position()
            .map_or(index as u64 + 1, csv::Position::line);
        records.push(parse_record(&record, line)?);
    }

    if records.is_empty() {
        return Err(WriterError::EmptyCatalog {
            path: source.to_path_buf(),
        });
    }

    Catalog::from_records(records)
}

/// Convert one CSV record into an element
///
/// # Errors
///
/// Returns [`WriterError::InvalidCatalog`] if the record has fewer than
/// [`CATALOG_FIELD_COUNT`] fields or its symbol is not 1 to
/// [`crate::io::configuration::MAX_SYMBOL_LENGTH`] ASCII letters
pub fn parse_record(record: &StringRecord, line: u64) -> Result<ElementRecord> {
    if record.len() < CATALOG_FIELD_COUNT {
        return Err(invalid_catalog(
            line,
            &format!(
                "expected at least {CATALOG_FIELD_COUNT} fields, found {}",
                record.len()
            ),
        ));
    }

    let field = |index: usize| record.get(index).unwrap_or_default();
    let symbol = field(2);
    validate_symbol(symbol).map_err(|reason| invalid_catalog(line, &reason))?;

    Ok(ElementRecord::new(field(0), field(1), symbol, field(3)))
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}
