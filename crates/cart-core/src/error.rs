//! # Error Types
//!
//! Structured diagnostics and domain errors for cart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cart-core errors (this file)                                          │
//! │  ├── ErrorRecord  - One validation finding (header/row/cell)           │
//! │  └── CoreError    - Misuse of the pure API (unvalidated line)          │
//! │                                                                         │
//! │  cart-parser errors (separate crate)                                   │
//! │  └── ParserError  - Read failure, or a fatal validation report         │
//! │                                                                         │
//! │  Flow: Vec<ErrorRecord> → ParserError::Invalid → caller diagnostics    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Validation findings are COLLECTED, never thrown individually
//! 2. `ErrorRecord` field values and message text are a compatibility
//!    contract with the report consumers, not cosmetic
//! 3. Errors are typed, never bare strings

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Error Record
// =============================================================================

/// Column value used when a finding applies to a whole row rather than a
/// single cell (wrong cell count).
pub const ROW_LEVEL_COLUMN: i32 = -1;

/// The category of a validation finding.
///
/// Serializes lowercase (`"header"`, `"row"`, `"cell"`) to match the
/// report shape consumers already parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Header cell name does not match the schema.
    Header,
    /// Data row has the wrong number of cells.
    Row,
    /// Cell value violates its column constraint.
    Cell,
}

/// One structured validation finding.
///
/// ## Coordinates
/// - `row`: 0 is the header line, data rows are 1-based
/// - `column`: 0-based cell position, or [`ROW_LEVEL_COLUMN`] (-1) when
///   the finding applies to the row as a whole
///
/// Records are immutable once created and are collected in scan order:
/// header first, then rows in order, then cells in column order within a
/// row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRecord {
    /// Finding category. Serialized as `type` for report compatibility.
    #[serde(rename = "type")]
    pub kind: ErrorKind,

    /// 0 = header, 1-based for data rows.
    pub row: usize,

    /// 0-based cell position, or -1 for row-level findings.
    pub column: i32,

    /// Human-readable description of the finding.
    pub message: String,
}

impl ErrorRecord {
    /// Creates a validation finding.
    ///
    /// This is the single construction point for findings; the message
    /// templates live next to the checks that emit them.
    pub fn new(kind: ErrorKind, row: usize, column: i32, message: String) -> Self {
        ErrorRecord {
            kind,
            row,
            column,
            message,
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Errors from misusing the pure parsing API.
///
/// The line parser assumes its input already passed structural
/// validation. Feeding it an unvalidated line surfaces here instead of
/// panicking or silently producing a corrupt item.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Line does not have one cell per schema column.
    #[error("Line does not match the cart schema: {line:?}")]
    MalformedLine { line: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
