//! # dqgate-core — Order Record Validation Core
//!
//! Row-wise schema conformance checking for tabular order data. Declares
//! a fixed order-record schema, validates each row of a CSV source
//! against it, and reduces the results to a single pass/fail report.
//!
//! ## Shape of a Run
//!
//! [`validate_source`] loads the table, then applies the schema to every
//! row in input order via [`validate_rows`]. Each failing row contributes
//! one [`report::RowError`] carrying its full violation set; after the
//! last row the [`ValidationReport`] is the terminal artifact.
//!
//! ## Failure Classes
//!
//! - Field/row violations are collected, never fatal to the run.
//! - [`SourceError`] (missing file, malformed CSV, wrong header) aborts
//!   the run before any report exists.
//!
//! ## Crate Policy
//!
//! - No process exit, no environment access, no network: the core returns
//!   discriminated outcomes and leaves policy to the entry point.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod record;
pub mod report;
pub mod schema;
pub mod source;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use record::OrderRecord;
pub use report::{RowError, RowKey, ValidationReport};
pub use schema::{
    validate_row, FieldKind, FieldSpec, RawRow, RowViolations, Violation, ViolationReason,
    ORDER_FIELDS,
};
pub use source::{read_rows, SourceError};
pub use validate::{validate_rows, validate_source};
