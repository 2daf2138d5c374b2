//! # Parse Orchestration
//!
//! Runs the full pipeline over one cart file.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      CartParser::parse(path)                            │
//! │                                                                         │
//! │  ContentSource.read(path) ──► raw content                              │
//! │       │                            │                                    │
//! │       │ io error?                  ▼                                    │
//! │       └──► ParserError::Read   cart_core::validate(content)            │
//! │                                    │                                    │
//! │                    any findings?   │   no findings                      │
//! │                         │          │                                    │
//! │                         ▼          ▼                                    │
//! │            ParserError::Invalid   per data line:                       │
//! │            (full ordered report)    parse_line(line, IdGenerator.next) │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                                 calc_total(items) ──► Cart             │
//! │                                                                         │
//! │  A non-empty report is FATAL: no partial cart is ever produced.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-threaded and synchronous: the whole pipeline runs to
//! completion on one call, and each call is independent.

use std::path::Path;

use tracing::{debug, info, warn};

use cart_core::validate::LINE_DELIMITER;
use cart_core::{calc_total, parse_line, validate, Cart};

use crate::error::{ParserError, ParserResult};
use crate::source::{ContentSource, FsSource, IdGenerator, UuidGenerator};

/// Orchestrates content reading, validation, parsing, and totalling.
///
/// ## Usage
/// ```rust,no_run
/// use cart_parser::CartParser;
///
/// let parser = CartParser::new();
/// let cart = parser.parse("samples/cart.csv")?;
/// println!("{} items, total {}", cart.items.len(), cart.total);
/// # Ok::<(), cart_parser::ParserError>(())
/// ```
pub struct CartParser {
    source: Box<dyn ContentSource>,
    ids: Box<dyn IdGenerator>,
}

impl CartParser {
    /// Creates a parser with the production collaborators: filesystem
    /// content and UUID v4 ids.
    pub fn new() -> Self {
        CartParser::with_collaborators(FsSource, UuidGenerator)
    }

    /// Creates a parser with explicit collaborators.
    ///
    /// Tests inject an in-memory source and a deterministic id sequence
    /// here; production code normally wants [`CartParser::new`].
    pub fn with_collaborators(
        source: impl ContentSource + 'static,
        ids: impl IdGenerator + 'static,
    ) -> Self {
        CartParser {
            source: Box::new(source),
            ids: Box::new(ids),
        }
    }

    /// Parses the cart file at `path`.
    ///
    /// Reads content once, validates it, and either returns the parsed
    /// [`Cart`] or fails with:
    ///
    /// - [`ParserError::Read`] when the content cannot be read
    /// - [`ParserError::Invalid`] carrying the full ordered finding list
    ///   when validation reports anything at all
    ///
    /// Invalid input is deterministic and non-transient, so there is no
    /// retry logic anywhere in the pipeline.
    pub fn parse(&self, path: impl AsRef<Path>) -> ParserResult<Cart> {
        let path = path.as_ref();

        let content = self.source.read(path).map_err(|source| ParserError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "Read cart content");

        let findings = validate(&content);
        if !findings.is_empty() {
            warn!(path = %path.display(), findings = findings.len(), "Cart content failed validation");
            return Err(ParserError::Invalid(findings));
        }

        // Validation passed, so every data line has the right shape
        let mut items = Vec::new();
        for line in content.split(LINE_DELIMITER).skip(1) {
            items.push(parse_line(line, self.ids.next_id())?);
        }

        let total = calc_total(&items);
        info!(path = %path.display(), items = items.len(), total, "Parsed cart");

        Ok(Cart { items, total })
    }
}

impl Default for CartParser {
    fn default() -> Self {
        CartParser::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
