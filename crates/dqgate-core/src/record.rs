//! Validated order record.

use serde::{Deserialize, Serialize};

/// One validated order row.
///
/// Constructed only by [`crate::schema::validate_row`]; every field has
/// already been coerced from its raw text form and constraint-checked.
/// Records are immutable value objects. `order_id` identifies the row in
/// reports but is not guaranteed unique across a source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Order identifier, non-empty.
    pub order_id: String,
    /// Ordered quantity, never negative.
    pub qty: i64,
    /// Order amount, finite and never negative.
    pub amount: f64,
    /// Currency code, non-empty.
    pub currency: String,
    /// Destination country code, non-empty.
    pub ship_country: String,
}
