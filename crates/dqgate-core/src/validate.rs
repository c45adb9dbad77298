//! # Row-wise Validation Run
//!
//! Orchestrates one validation pass: load rows from a source, apply the
//! schema to each row in input order, and aggregate failures into a
//! [`ValidationReport`]. The run is fully sequential; the error list is
//! owned by the pass for its duration.
//!
//! The core never terminates the process and never notifies anyone: it
//! returns a discriminated outcome (report, or [`SourceError`] when the
//! input cannot be read at all) and leaves exit codes and alert delivery
//! to the entry point.

use std::path::Path;

use crate::report::{RowKey, ValidationReport};
use crate::schema::{self, RawRow};
use crate::source::{self, SourceError};

/// Validate rows already loaded from a source.
///
/// Each failing row contributes exactly one report entry carrying all of
/// its violations; entry order follows input order. Valid rows leave no
/// trace in the report beyond the checked count.
pub fn validate_rows(rows: &[RawRow]) -> ValidationReport {
    let mut report = ValidationReport::new(rows.len());
    for (index, raw) in rows.iter().enumerate() {
        if let Err(violations) = schema::validate_row(raw) {
            report.add_row_error(row_key(raw, index), violations);
        }
    }
    tracing::debug!(
        rows = rows.len(),
        failures = report.error_count(),
        "validation pass complete"
    );
    report
}

/// Load the CSV at `path` and validate every row.
pub fn validate_source(path: &Path) -> Result<ValidationReport, SourceError> {
    let rows = source::read_rows(path)?;
    Ok(validate_rows(&rows))
}

/// Key a failing row by its `order_id` when the raw value is usable,
/// else by its 1-based position among the data rows.
fn row_key(raw: &RawRow, index: usize) -> RowKey {
    match raw.get("order_id").map(|v| v.trim()) {
        Some(id) if !id.is_empty() => RowKey::OrderId(id.to_string()),
        _ => RowKey::Index(index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn order(id: &str, qty: &str) -> RawRow {
        row(&[
            ("order_id", id),
            ("qty", qty),
            ("amount", "100.0"),
            ("currency", "INR"),
            ("ship_country", "IN"),
        ])
    }

    #[test]
    fn all_valid_rows_pass() {
        let rows = vec![order("TXN-101", "2"), order("TXN-102", "5")];
        let report = validate_rows(&rows);
        assert!(report.passed());
        assert_eq!(report.rows_checked(), 2);
        assert_eq!(report.error_count(), 0);
    }

    #[test]
    fn failing_row_appears_exactly_once_keyed_by_order_id() {
        let rows = vec![
            order("TXN-101", "2"),
            order("TXN-102", "5"),
            order("TXN-103", "-1"),
            order("TXN-104", "10"),
        ];
        let report = validate_rows(&rows);
        assert!(!report.passed());
        assert_eq!(report.error_count(), 1);
        assert_eq!(
            report.errors()[0].key,
            RowKey::OrderId("TXN-103".to_string())
        );
    }

    #[test]
    fn blank_order_id_falls_back_to_row_index() {
        let rows = vec![order("TXN-101", "2"), order("  ", "-1")];
        let report = validate_rows(&rows);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.errors()[0].key, RowKey::Index(2));
    }

    #[test]
    fn error_order_matches_input_order() {
        let rows = vec![
            order("TXN-9", "-1"),
            order("TXN-2", "ok"),
            order("TXN-5", "-3"),
        ];
        let report = validate_rows(&rows);
        let keys: Vec<String> = report
            .errors()
            .iter()
            .map(|e| e.key.to_string())
            .collect();
        assert_eq!(keys, ["order TXN-9", "order TXN-2", "order TXN-5"]);
    }

    #[test]
    fn validation_is_idempotent() {
        let rows = vec![order("TXN-101", "-1"), order("TXN-102", "2")];
        let first = validate_rows(&rows);
        let second = validate_rows(&rows);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_passes() {
        let report = validate_rows(&[]);
        assert!(report.passed());
        assert_eq!(report.rows_checked(), 0);
    }

    #[test]
    fn validate_source_reads_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        fs::write(
            &path,
            "order_id,qty,amount,currency,ship_country\n\
             TXN-101,2,150.5,INR,IN\n\
             TXN-103,-1,50.0,INR,IN\n",
        )
        .unwrap();
        let report = validate_source(&path).unwrap();
        assert_eq!(report.rows_checked(), 2);
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn validate_source_propagates_source_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_source(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
