//! # CSV Source Loading
//!
//! Reads a delimited order table into raw rows for validation. The header
//! row names the fields; data-row order is preserved for error reporting.
//!
//! Anything that prevents producing rows at all — a missing or unreadable
//! file, malformed CSV, a header lacking required columns — is a
//! [`SourceError`]. This failure class is distinct from row-level
//! validation failure and aborts the run before any report exists.

use std::path::Path;

use thiserror::Error;

use crate::schema::{RawRow, ORDER_FIELDS};

/// Error loading or parsing the input table.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The input file could not be opened or read.
    #[error("cannot read input '{path}': {source}")]
    Io {
        /// Path of the input that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV payload could not be parsed.
    #[error("malformed CSV in '{path}': {detail}")]
    Malformed {
        /// Path of the input that failed.
        path: String,
        /// Parser diagnostic.
        detail: String,
    },

    /// The header row lacks columns the schema requires.
    #[error("header in '{path}' is missing required columns: {cols}", cols = .missing.join(", "))]
    MissingColumns {
        /// Path of the input that failed.
        path: String,
        /// Schema columns absent from the header.
        missing: Vec<&'static str>,
    },
}

/// Read every data row from the CSV at `path`, in input order.
///
/// Header names are trimmed before matching. Columns beyond the schema's
/// are carried through in the raw rows and ignored downstream.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, SourceError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| classify(path, e))?;

    let headers = reader.headers().map_err(|e| classify(path, e))?.clone();
    let missing: Vec<&'static str> = ORDER_FIELDS
        .iter()
        .map(|spec| spec.name)
        .filter(|name| !headers.iter().any(|h| h.trim() == *name))
        .collect();
    if !missing.is_empty() {
        return Err(SourceError::MissingColumns {
            path: path.display().to_string(),
            missing,
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| classify(path, e))?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.trim().to_string(), v.to_string()))
            .collect();
        rows.push(row);
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "source loaded");
    Ok(rows)
}

/// Split a `csv::Error` into the I/O and parse failure classes.
fn classify(path: &Path, err: csv::Error) -> SourceError {
    let path = path.display().to_string();
    let detail = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => SourceError::Io { path, source },
        _ => SourceError::Malformed { path, detail },
    }
}
