//! # Parser Error Types
//!
//! Error types for the orchestration layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (filesystem)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ParserError::Read ← adds the offending path                           │
//! │                                                                         │
//! │  Vec<ErrorRecord> (cart-core validation findings)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ParserError::Invalid ← the FULL ordered report, fatal for the parse   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use cart_core::{CoreError, ErrorRecord};
use thiserror::Error;

/// Errors from orchestrating a cart parse.
#[derive(Debug, Error)]
pub enum ParserError {
    /// Content could not be read from the source.
    ///
    /// ## When This Occurs
    /// - Path does not exist
    /// - File permissions issue
    /// - Content is not valid UTF-8
    #[error("Failed to read cart content from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Validation produced findings; no cart is built.
    ///
    /// Carries the complete ordered report so callers can diagnose every
    /// problem in one pass, not just the first.
    #[error("Cart content failed validation with {} finding(s)", .0.len())]
    Invalid(Vec<ErrorRecord>),

    /// A line reached the line parser without passing validation.
    ///
    /// Unreachable through [`crate::CartParser::parse`], which validates
    /// first; kept so direct misuse of the core API stays typed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with ParserError.
pub type ParserResult<T> = Result<T, ParserError>;

// =============================================================================
// Unit Tests
// =============================================================================
