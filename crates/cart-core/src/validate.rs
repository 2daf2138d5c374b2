//! # Validation Module
//!
//! Schema-driven validation of raw cart CSV content.
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Passes                                  │
//! │                                                                         │
//! │  raw content                                                            │
//! │       │ split on '\n'                                                   │
//! │       ▼                                                                 │
//! │  line 0 ──► header pass ──► first name mismatch ──► header finding     │
//! │                             (then the pass stops)                       │
//! │                                                                         │
//! │  lines 1..N ──► row pass, per row:                                     │
//! │       │                                                                 │
//! │       ├── cell count ≠ 3? ──► row finding, SKIP cell checks            │
//! │       │                                                                 │
//! │       └── cell count = 3 ──► cell pass, per cell in column order:      │
//! │                 ├── Text           → must be non-empty                 │
//! │                 └── PositiveNumber → must parse as f64 and be > 0      │
//! │                                                                         │
//! │  Findings accumulate in scan order: header, then rows, then cells.     │
//! │  Nothing is thrown; the caller receives the FULL report.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Message text and finding coordinates are a compatibility contract with
//! report consumers. Blank and whitespace-only lines are NOT filtered:
//! they count as data rows and surface as row findings.
//!
//! ## Usage
//! ```rust
//! use cart_core::validate::validate;
//!
//! let findings = validate("Product name,Price,Quantity\nMollis consequat,9.00,2");
//! assert!(findings.is_empty());
//! ```

use crate::error::{ErrorKind, ErrorRecord, ROW_LEVEL_COLUMN};
use crate::schema::{ColumnKind, SCHEMA};

/// Cell delimiter. No quoting or escaping: every `,` splits.
pub const CELL_DELIMITER: char = ',';

/// Row delimiter.
pub const LINE_DELIMITER: char = '\n';

/// Row index of the header line in finding coordinates.
const HEADER_ROW: usize = 0;

// =============================================================================
// Structural Validator
// =============================================================================

/// Validates raw cart content against the schema.
///
/// Returns every finding in scan order: the header pass first, then data
/// rows in order, then cells in column order within each row. An empty
/// list means the content is well-formed.
///
/// ## Example
/// ```rust
/// use cart_core::validate::validate;
///
/// let findings = validate("Product name,Price,Quantity\nMollis consequat,free,2");
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].row, 1);
/// assert_eq!(findings[0].column, 1);
/// ```
pub fn validate(content: &str) -> Vec<ErrorRecord> {
    let mut findings = Vec::new();
    let mut lines = content.split(LINE_DELIMITER);

    // split always yields at least the header slot, even for empty input
    if let Some(header) = lines.next() {
        validate_header(header, &mut findings);
    }

    for (index, line) in lines.enumerate() {
        validate_row(line, index + 1, &mut findings);
    }

    findings
}

/// Checks the header line against the schema column names.
///
/// Linear scan that reports the FIRST mismatching position only, then
/// stops the pass. A missing header cell compares as the empty string.
fn validate_header(line: &str, findings: &mut Vec<ErrorRecord>) {
    let cells = split_cells(line);

    for (position, column) in SCHEMA.iter().enumerate() {
        let actual = cells.get(position).copied().unwrap_or("");
        if actual != column.name {
            findings.push(ErrorRecord::new(
                ErrorKind::Header,
                HEADER_ROW,
                position as i32,
                format!(
                    "Expected header to be named \"{}\" but received {}.",
                    column.name, actual
                ),
            ));
            break;
        }
    }
}

/// Checks one data row: shape first, then cells.
///
/// A wrong cell count produces a single row-level finding and skips the
/// cell pass entirely; a malformed row is never inspected cell by cell.
fn validate_row(line: &str, row: usize, findings: &mut Vec<ErrorRecord>) {
    let cells = split_cells(line);

    if cells.len() != SCHEMA.len() {
        findings.push(ErrorRecord::new(
            ErrorKind::Row,
            row,
            ROW_LEVEL_COLUMN,
            format!(
                "Expected row to have {} cells but received {}.",
                SCHEMA.len(),
                cells.len()
            ),
        ));
        return;
    }

    for (position, cell) in cells.iter().enumerate() {
        if let Some(finding) = validate_cell(cell, position, row) {
            findings.push(finding);
        }
    }
}

// =============================================================================
// Cell Validator
// =============================================================================

/// Validates a single cell against its schema column constraint.
///
/// Returns `None` for a well-formed cell, or one finding describing the
/// violation. Pure: no state, no side effects. An out-of-range
/// `column_index` has no schema column to check against and yields `None`.
///
/// ## Example
/// ```rust
/// use cart_core::validate::validate_cell;
///
/// assert!(validate_cell("Mollis consequat", 0, 1).is_none());
/// assert!(validate_cell("-2", 2, 1).is_some());
/// ```
pub fn validate_cell(value: &str, column_index: usize, row_index: usize) -> Option<ErrorRecord> {
    let column = SCHEMA.get(column_index)?;
    let value = value.trim();

    let message = match column.kind {
        ColumnKind::Text => {
            if !value.is_empty() {
                return None;
            }
            format!(
                "Expected cell to be a nonempty string but received \"{}\".",
                value
            )
        }
        ColumnKind::PositiveNumber => {
            match value.parse::<f64>() {
                // NaN fails the comparison and falls through to the finding
                Ok(number) if number > 0.0 => return None,
                _ => format!(
                    "Expected cell to be a positive number but received \"{}\".",
                    value
                ),
            }
        }
    };

    Some(ErrorRecord::new(
        ErrorKind::Cell,
        row_index,
        column_index as i32,
        message,
    ))
}

// =============================================================================
// Helpers
// =============================================================================

/// Splits one line into trimmed cells.
///
/// `"".split(',')` yields a single empty cell, so a blank line counts as
/// a one-cell row; the row pass turns that into a shape finding rather
/// than silently skipping the line.
pub(crate) fn split_cells(line: &str) -> Vec<&str> {
    line.split(CELL_DELIMITER).map(str::trim).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_HEADER: &str = "Product name,Price,Quantity";

    #[test]
    fn test_valid_content_yields_no_findings() {
        let content = format!("{VALID_HEADER}\nMollis consequat,9.00,2");
        assert!(validate(&content).is_empty());
    }

    #[test]
    fn test_header_mismatch_is_reported_with_coordinates() {
        let findings = validate("Producy name,Price,Quantity");
        assert_eq!(
            findings,
            vec![ErrorRecord::new(
                ErrorKind::Header,
                0,
                0,
                "Expected header to be named \"Product name\" but received Producy name."
                    .to_string(),
            )]
        );
    }

    #[test]
    fn test_header_pass_stops_at_first_mismatch() {
        // Both Price and Quantity are wrong; only Price is reported
        let findings = validate("Product name,Cost,Amount");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].column, 1);
        assert_eq!(
            findings[0].message,
            "Expected header to be named \"Price\" but received Cost."
        );
    }

    #[test]
    fn test_header_cells_are_trimmed_before_comparison() {
        let findings = validate("  Product name , Price ,Quantity  ");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_missing_header_cell_compares_as_empty() {
        let findings = validate("Product name,Price");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, ErrorKind::Header);
        assert_eq!(findings[0].column, 2);
        assert_eq!(
            findings[0].message,
            "Expected header to be named \"Quantity\" but received ."
        );
    }

    #[test]
    fn test_whitespace_only_line_is_a_short_row() {
        let content = format!("{VALID_HEADER}\n     ");
        let findings = validate(&content);
        assert_eq!(
            findings,
            vec![ErrorRecord::new(
                ErrorKind::Row,
                1,
                ROW_LEVEL_COLUMN,
                "Expected row to have 3 cells but received 1.".to_string(),
            )]
        );
    }

    #[test]
    fn test_short_row_skips_cell_checks() {
        // The lone cell is not a positive number either, but the row
        // finding preempts any cell findings
        let content = format!("{VALID_HEADER}\nMollis consequat,9.00");
        let findings = validate(&content);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, ErrorKind::Row);
        assert_eq!(findings[0].column, -1);
    }

    #[test]
    fn test_long_row_is_a_shape_finding() {
        let content = format!("{VALID_HEADER}\nMollis consequat,9.00,2,extra");
        let findings = validate(&content);
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].message,
            "Expected row to have 3 cells but received 4."
        );
    }

    #[test]
    fn test_non_numeric_price_is_a_cell_finding() {
        let content = format!("{VALID_HEADER}\nMollis consequat,sdfsdf,2");
        let findings = validate(&content);
        assert_eq!(
            findings,
            vec![ErrorRecord::new(
                ErrorKind::Cell,
                1,
                1,
                "Expected cell to be a positive number but received \"sdfsdf\".".to_string(),
            )]
        );
    }

    #[test]
    fn test_empty_name_is_a_cell_finding_on_column_zero() {
        let content = format!("{VALID_HEADER}\n  ,9.00,2");
        let findings = validate(&content);
        assert_eq!(
            findings,
            vec![ErrorRecord::new(
                ErrorKind::Cell,
                1,
                0,
                "Expected cell to be a nonempty string but received \"\".".to_string(),
            )]
        );
    }

    #[test]
    fn test_all_cells_in_a_well_shaped_row_are_checked() {
        let content = format!("{VALID_HEADER}\n ,free,0");
        let findings = validate(&content);
        assert_eq!(findings.len(), 3);
        assert_eq!(findings[0].column, 0);
        assert_eq!(findings[1].column, 1);
        assert_eq!(findings[2].column, 2);
        assert!(findings.iter().all(|f| f.kind == ErrorKind::Cell));
    }

    #[test]
    fn test_findings_follow_scan_order_across_rows() {
        let content = format!("{VALID_HEADER}\nMollis consequat,-1,2\nonly,two\nTvoluptatem,10.32,0");
        let findings = validate(&content);
        assert_eq!(findings.len(), 3);
        assert_eq!((findings[0].row, findings[0].column), (1, 1));
        assert_eq!((findings[1].row, findings[1].column), (2, -1));
        assert_eq!((findings[2].row, findings[2].column), (3, 2));
    }

    #[test]
    fn test_trailing_blank_line_counts_as_a_data_row() {
        let content = format!("{VALID_HEADER}\nMollis consequat,9.00,2\n");
        let findings = validate(&content);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, ErrorKind::Row);
        assert_eq!(findings[0].row, 2);
    }

    #[test]
    fn test_validate_cell_rejects_zero_negative_and_nan() {
        assert!(validate_cell("0", 1, 1).is_some());
        assert!(validate_cell("-9.50", 1, 1).is_some());
        assert!(validate_cell("NaN", 1, 1).is_some());
        assert!(validate_cell("9.00", 1, 1).is_none());
        assert!(validate_cell("0.01", 2, 1).is_none());
    }

    #[test]
    fn test_validate_cell_out_of_range_column_yields_none() {
        assert!(validate_cell("anything", SCHEMA.len(), 1).is_none());
    }

    #[test]
    fn test_empty_content_fails_the_header_pass() {
        let findings = validate("");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, ErrorKind::Header);
        assert_eq!(findings[0].column, 0);
    }
}
