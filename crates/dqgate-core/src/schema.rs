//! # Order Record Schema
//!
//! Declares the required fields and per-field constraints of one order
//! row, and validates a raw field mapping into an [`OrderRecord`].
//!
//! ## Coercion Policy
//!
//! Raw values arrive as text from a delimited source. Each value is
//! trimmed, then coerced per the declared field kind before constraint
//! checking: integers use the exact `i64` parse (no floats, no empty
//! cells), floats use the `f64` parse and must be finite, strings must be
//! non-empty after trimming. A coercion failure is itself a violation.
//!
//! All violations for a row are collected, not just the first — callers
//! need the full set for diagnostics. Violation order follows the schema
//! declaration order, which keeps reports deterministic regardless of the
//! raw row's map iteration order.

use std::collections::HashMap;
use std::fmt;

use crate::record::OrderRecord;

/// Raw row as parsed from a delimited text source: header name → value.
///
/// Columns not declared in [`ORDER_FIELDS`] may be present; they are
/// ignored by validation.
pub type RawRow = HashMap<String, String>;

/// Value kinds a schema field may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-empty string.
    Text,
    /// Integer, `>= 0`.
    NonNegativeInt,
    /// Finite float, `>= 0`.
    NonNegativeFloat,
}

/// One declared schema field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Column name, exactly as it appears in the source header.
    pub name: &'static str,
    /// Declared value kind.
    pub kind: FieldKind,
}

/// The order-record schema, in declaration order.
pub const ORDER_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "order_id",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "qty",
        kind: FieldKind::NonNegativeInt,
    },
    FieldSpec {
        name: "amount",
        kind: FieldKind::NonNegativeFloat,
    },
    FieldSpec {
        name: "currency",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "ship_country",
        kind: FieldKind::Text,
    },
];

/// Why a field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationReason {
    /// The column value was absent from the row.
    Missing,
    /// The raw value could not be coerced to the declared type.
    ExpectedType(&'static str),
    /// The coerced value failed its constraint.
    Constraint(&'static str),
}

/// A single field's constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the offending field.
    pub field: &'static str,
    /// Why the field was rejected.
    pub reason: ViolationReason,
}

impl Violation {
    fn missing(field: &'static str) -> Self {
        Self {
            field,
            reason: ViolationReason::Missing,
        }
    }

    fn expected(field: &'static str, ty: &'static str) -> Self {
        Self {
            field,
            reason: ViolationReason::ExpectedType(ty),
        }
    }

    fn constraint(field: &'static str, rule: &'static str) -> Self {
        Self {
            field,
            reason: ViolationReason::Constraint(rule),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            ViolationReason::Missing => write!(f, "{}: value is missing", self.field),
            ViolationReason::ExpectedType(ty) => write!(f, "{}: expected {ty}", self.field),
            ViolationReason::Constraint(rule) => write!(f, "{}: {rule}", self.field),
        }
    }
}

/// All violations collected for one row. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowViolations {
    violations: Vec<Violation>,
}

impl RowViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for RowViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Validate one raw row against the order schema.
///
/// Returns the strongly-typed record, or every violation found in the
/// row. No side effects.
pub fn validate_row(raw: &RawRow) -> Result<OrderRecord, RowViolations> {
    let mut violations = Vec::new();

    let order_id = check_text(raw, "order_id", &mut violations);
    let qty = check_int(raw, "qty", &mut violations);
    let amount = check_float(raw, "amount", &mut violations);
    let currency = check_text(raw, "currency", &mut violations);
    let ship_country = check_text(raw, "ship_country", &mut violations);

    match (order_id, qty, amount, currency, ship_country) {
        (Some(order_id), Some(qty), Some(amount), Some(currency), Some(ship_country)) => {
            Ok(OrderRecord {
                order_id,
                qty,
                amount,
                currency,
                ship_country,
            })
        }
        _ => Err(RowViolations { violations }),
    }
}

fn raw_value<'a>(raw: &'a RawRow, field: &'static str) -> Option<&'a str> {
    raw.get(field).map(|v| v.trim())
}

fn check_text(raw: &RawRow, field: &'static str, out: &mut Vec<Violation>) -> Option<String> {
    match raw_value(raw, field) {
        None => {
            out.push(Violation::missing(field));
            None
        }
        Some("") => {
            out.push(Violation::constraint(field, "must not be empty"));
            None
        }
        Some(v) => Some(v.to_string()),
    }
}

fn check_int(raw: &RawRow, field: &'static str, out: &mut Vec<Violation>) -> Option<i64> {
    let Some(v) = raw_value(raw, field) else {
        out.push(Violation::missing(field));
        return None;
    };
    match v.parse::<i64>() {
        Ok(n) if n >= 0 => Some(n),
        Ok(_) => {
            out.push(Violation::constraint(field, "must be >= 0"));
            None
        }
        Err(_) => {
            out.push(Violation::expected(field, "integer"));
            None
        }
    }
}

fn check_float(raw: &RawRow, field: &'static str, out: &mut Vec<Violation>) -> Option<f64> {
    let Some(v) = raw_value(raw, field) else {
        out.push(Violation::missing(field));
        return None;
    };
    match v.parse::<f64>() {
        // A non-finite parse result (NaN, inf) would slip past the `>= 0`
        // comparison; it is a type failure, not a constraint failure.
        Ok(x) if !x.is_finite() => {
            out.push(Violation::expected(field, "number"));
            None
        }
        Ok(x) if x >= 0.0 => Some(x),
        Ok(_) => {
            out.push(Violation::constraint(field, "must be >= 0"));
            None
        }
        Err(_) => {
            out.push(Violation::expected(field, "number"));
            None
        }
    }
}
