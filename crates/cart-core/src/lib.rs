//! # cart-core: Pure Business Logic for the Cart Parser
//!
//! This crate is the **heart** of the cart parser. It contains the
//! schema-driven validation engine and the thin consumers of validated
//! data (line parsing, total calculation) as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Parser Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    cart-parser (I/O layer)                      │   │
//! │  │     ContentSource ──► CartParser::parse ──► IdGenerator        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cart-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  schema   │  │ validate  │  │   item    │  │   total   │  │   │
//! │  │   │  Column   │  │  header   │  │ CartItem  │  │ calc_total│  │   │
//! │  │   │  SCHEMA   │  │ row, cell │  │ parse_line│  │  rounding │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO RANDOMNESS • PURE FUNCTIONS                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`schema`] - The fixed three-column cart schema
//! - [`validate`] - Structural and cell validation producing ordered findings
//! - [`item`] - Cart item types and the line parser
//! - [`total`] - Total calculation with cent rounding
//! - [`error`] - Finding records and domain errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, always
//! 2. **No I/O**: file access and id generation live in cart-parser
//! 3. **Collected Findings**: validation never throws; callers get the
//!    full ordered report
//! 4. **Explicit Errors**: typed errors, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::{calc_total, parse_line, validate};
//!
//! let content = "Product name,Price,Quantity\nMollis consequat,9.00,2";
//! assert!(validate(content).is_empty());
//!
//! let item = parse_line("Mollis consequat,9.00,2", "item-1".to_string()).unwrap();
//! let total = calc_total(std::slice::from_ref(&item));
//! assert_eq!(total, 18.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod item;
pub mod schema;
pub mod total;
pub mod validate;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cart_core::validate` instead of
// `use cart_core::validate::validate`

pub use error::{CoreError, CoreResult, ErrorKind, ErrorRecord, ROW_LEVEL_COLUMN};
pub use item::{parse_line, Cart, CartItem};
pub use schema::{Column, ColumnKind, SCHEMA};
pub use total::{calc_total, round_to_cents};
pub use validate::{validate, validate_cell};
