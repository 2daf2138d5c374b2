//! # Cart Items
//!
//! Typed records produced from validated data rows, and the parsed cart
//! that owns them.
//!
//! The line parser here is a thin consumer of validated data: it maps
//! cells positionally and performs no constraint checks of its own. The
//! id is supplied by the caller, since generating one would drag randomness
//! into this crate, and cart-core stays pure.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::validate::split_cells;

// =============================================================================
// Cart Item
// =============================================================================

/// One parsed product record from a validated data row.
///
/// ## Invariants (guaranteed by prior validation)
/// - `name` is non-empty after trimming
/// - `price` and `quantity` are strictly positive
/// - `id` is an opaque string, unique per item, generated per parse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Opaque unique identifier, freshly generated per item.
    pub id: String,

    /// Product name, from cell 0.
    pub name: String,

    /// Unit price, from cell 1.
    pub price: f64,

    /// Quantity, from cell 2.
    pub quantity: f64,
}

/// A fully parsed cart: the terminal artifact of a successful parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Items in data-row order.
    pub items: Vec<CartItem>,

    /// Sum of price × quantity across items, rounded to 2 decimals.
    pub total: f64,
}

// =============================================================================
// Line Parser
// =============================================================================

/// Converts one validated data row into a [`CartItem`].
///
/// Assumes the line already passed structural validation and does not
/// re-validate; a line that never went through validation surfaces as
/// [`CoreError::MalformedLine`] instead of a corrupt item.
///
/// ## Example
/// ```rust
/// use cart_core::item::parse_line;
///
/// let item = parse_line("Mollis consequat,9.00,2", "id-1".to_string()).unwrap();
/// assert_eq!(item.name, "Mollis consequat");
/// assert_eq!(item.price, 9.0);
/// assert_eq!(item.quantity, 2.0);
/// ```
pub fn parse_line(line: &str, id: String) -> CoreResult<CartItem> {
    let cells = split_cells(line);

    let (name, price, quantity) = match cells.as_slice() {
        [name, price, quantity] => (*name, *price, *quantity),
        _ => {
            return Err(CoreError::MalformedLine {
                line: line.to_string(),
            })
        }
    };

    let price = price.parse::<f64>().map_err(|_| CoreError::MalformedLine {
        line: line.to_string(),
    })?;
    let quantity = quantity
        .parse::<f64>()
        .map_err(|_| CoreError::MalformedLine {
            line: line.to_string(),
        })?;

    Ok(CartItem {
        id,
        name: name.to_string(),
        price,
        quantity,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_maps_cells_positionally() {
        let item = parse_line("Mollis consequat,9.00,2", "any-id".to_string()).unwrap();
        assert_eq!(item.id, "any-id");
        assert_eq!(item.name, "Mollis consequat");
        assert_eq!(item.price, 9.0);
        assert_eq!(item.quantity, 2.0);
    }

    #[test]
    fn test_parse_line_trims_cells() {
        let item = parse_line("  Tvoluptatem , 10.32 , 1 ", "id".to_string()).unwrap();
        assert_eq!(item.name, "Tvoluptatem");
        assert_eq!(item.price, 10.32);
        assert_eq!(item.quantity, 1.0);
    }

    #[test]
    fn test_parse_line_rejects_wrong_cell_count() {
        assert!(matches!(
            parse_line("only,two", "id".to_string()),
            Err(CoreError::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_parse_line_rejects_unparseable_numbers() {
        assert!(parse_line("Mollis consequat,free,2", "id".to_string()).is_err());
        assert!(parse_line("Mollis consequat,9.00,many", "id".to_string()).is_err());
    }

    #[test]
    fn test_item_serializes_with_plain_field_names() {
        let item = CartItem {
            id: "3e6def17-5e87-4f27-b6b8-ae78948523a9".to_string(),
            name: "Mollis consequat".to_string(),
            price: 9.0,
            quantity: 2.0,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "3e6def17-5e87-4f27-b6b8-ae78948523a9");
        assert_eq!(json["name"], "Mollis consequat");
        assert_eq!(json["price"], 9.0);
        assert_eq!(json["quantity"], 2.0);
    }
}
