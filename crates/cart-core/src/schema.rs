//! # Schema Definition
//!
//! The fixed column layout a cart CSV must follow.
//!
//! Column order defines the positional mapping to row cells: cell 0 is
//! matched against `SCHEMA[0]`, cell 1 against `SCHEMA[1]`, and so on.
//! The schema is static data with no behavior; the validator consumes it
//! by read-only reference.

use serde::Serialize;

// =============================================================================
// Column Kind
// =============================================================================

/// The kind of value a column accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Non-empty text (after trimming).
    Text,
    /// A number strictly greater than zero.
    PositiveNumber,
}

// =============================================================================
// Column Descriptor
// =============================================================================

/// One expected column: its header name and the kind of value it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Exact header name (cells are trimmed before comparison).
    pub name: &'static str,

    /// Value constraint applied to every data cell in this column.
    pub kind: ColumnKind,
}

// =============================================================================
// The Cart Schema
// =============================================================================

/// The cart schema, in positional order.
///
/// ## Example
/// ```rust
/// use cart_core::schema::{ColumnKind, SCHEMA};
///
/// assert_eq!(SCHEMA.len(), 3);
/// assert_eq!(SCHEMA[0].name, "Product name");
/// assert_eq!(SCHEMA[1].kind, ColumnKind::PositiveNumber);
/// ```
pub const SCHEMA: [Column; 3] = [
    Column {
        name: "Product name",
        kind: ColumnKind::Text,
    },
    Column {
        name: "Price",
        kind: ColumnKind::PositiveNumber,
    },
    Column {
        name: "Quantity",
        kind: ColumnKind::PositiveNumber,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_order_is_positional() {
        let names: Vec<&str> = SCHEMA.iter().map(|c| c.name).collect();
        assert_eq!(names, ["Product name", "Price", "Quantity"]);
    }

    #[test]
    fn test_name_column_is_text_rest_are_numeric() {
        assert_eq!(SCHEMA[0].kind, ColumnKind::Text);
        assert_eq!(SCHEMA[1].kind, ColumnKind::PositiveNumber);
        assert_eq!(SCHEMA[2].kind, ColumnKind::PositiveNumber);
    }
}
