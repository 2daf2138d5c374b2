//! # cart-parser: Orchestration Layer for the Cart Parser
//!
//! This crate wires the pure validation and parsing logic in
//! [`cart_core`] to the outside world: it reads cart content from a
//! [`ContentSource`], generates item ids through an [`IdGenerator`], and
//! exposes the single entry point [`CartParser::parse`].
//!
//! ## Module Organization
//!
//! - [`parser`] - The `CartParser` orchestrator
//! - [`source`] - Collaborator traits and their production impls
//! - [`error`] - Read failures and fatal validation reports
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cart_parser::{CartParser, ParserError};
//!
//! let parser = CartParser::new();
//! match parser.parse("samples/cart.csv") {
//!     Ok(cart) => println!("total: {}", cart.total),
//!     Err(ParserError::Invalid(findings)) => {
//!         for finding in findings {
//!             eprintln!("{}", finding.message);
//!         }
//!     }
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod parser;
pub mod source;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ParserError, ParserResult};
pub use parser::CartParser;
pub use source::{ContentSource, FsSource, IdGenerator, UuidGenerator};

// Core types callers need to consume a parse result or its report
pub use cart_core::{Cart, CartItem, ErrorKind, ErrorRecord};
