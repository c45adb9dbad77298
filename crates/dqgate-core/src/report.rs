//! # Validation Report
//!
//! Aggregate outcome of validating one input source: the ordered list of
//! failing rows, the number of rows checked, and the pass/fail verdict.
//! Produced once per run; the terminal artifact of the core.

use std::fmt;

use crate::schema::RowViolations;

/// Key identifying a failing row in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKey {
    /// The row's `order_id` value, used whenever it is extractable.
    OrderId(String),
    /// 1-based data-row index, used when `order_id` itself is blank.
    Index(usize),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrderId(id) => write!(f, "order {id}"),
            Self::Index(i) => write!(f, "row {i}"),
        }
    }
}

/// One failing row: its key plus every violation collected for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// Identifies the row (order id, or position when the id is blank).
    pub key: RowKey,
    /// The row's full violation set, in schema declaration order.
    pub violations: RowViolations,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.key, self.violations)
    }
}

/// Aggregate of all row errors for one validation run.
///
/// `passed()` is true iff the error list is empty — there is no other
/// path to a passing verdict. Error order equals input row order, so two
/// runs over an unchanged source yield identical reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    rows_checked: usize,
    errors: Vec<RowError>,
}

impl ValidationReport {
    /// Create an empty report for a run over `rows_checked` rows.
    pub fn new(rows_checked: usize) -> Self {
        Self {
            rows_checked,
            errors: Vec::new(),
        }
    }

    /// Append one failing row. Call order must follow input row order.
    pub fn add_row_error(&mut self, key: RowKey, violations: RowViolations) {
        self.errors.push(RowError { key, violations });
    }

    /// Whether every row satisfied the schema.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing rows.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of rows the run examined.
    pub fn rows_checked(&self) -> usize {
        self.rows_checked
    }

    /// The failing rows, in input order.
    pub fn errors(&self) -> &[RowError] {
        &self.errors
    }

    /// Human-readable summary line for console output.
    pub fn summary(&self) -> String {
        if self.passed() {
            "All data is valid!".to_string()
        } else {
            self.alert_text()
        }
    }

    /// Alert body for the notification channel: a short header line plus
    /// the failing-row count.
    pub fn alert_text(&self) -> String {
        format!(
            "CI Data Quality Alert!\nFound {} invalid rows.",
            self.error_count()
        )
    }
}
