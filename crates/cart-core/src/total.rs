//! # Total Calculation
//!
//! Sums line totals across parsed items and rounds to the cent.
//!
//! ## Rounding
//! The sum is rounded decimal-safely: scale to cents, round half away
//! from zero, scale back. Rounding the SCALED value avoids the classic
//! binary-float drift where a total like 28.319999999999997 leaks into
//! the result. Half-cent behavior follows the scaled double: `1.115`
//! scales to exactly 111.5 and rounds up, while `1.005` scales to
//! 100.49999999999999 and rounds down; see the boundary tests.

use crate::item::CartItem;

/// Calculates the cart total: Σ price × quantity, rounded to 2 decimals.
///
/// ## Example
/// ```rust
/// use cart_core::item::CartItem;
/// use cart_core::total::calc_total;
///
/// let items = vec![
///     CartItem { id: "a".into(), name: "Mollis consequat".into(), price: 9.0, quantity: 2.0 },
///     CartItem { id: "b".into(), name: "Tvoluptatem".into(), price: 10.32, quantity: 1.0 },
/// ];
/// assert_eq!(calc_total(&items), 28.32);
/// ```
pub fn calc_total(items: &[CartItem]) -> f64 {
    let sum: f64 = items.iter().map(|item| item.price * item.quantity).sum();
    round_to_cents(sum)
}

/// Rounds an amount to 2 decimal places on the cent boundary.
///
/// Half-away-from-zero on the scaled value, which is half-up for the
/// non-negative totals this domain produces.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, quantity: f64) -> CartItem {
        CartItem {
            id: String::new(),
            name: "item".to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_total_of_known_items() {
        let items = vec![item(9.0, 2.0), item(10.32, 1.0)];
        assert_eq!(calc_total(&items), 28.32);
    }

    #[test]
    fn test_total_of_empty_cart_is_zero() {
        assert_eq!(calc_total(&[]), 0.0);
    }

    #[test]
    fn test_total_is_rounded_to_cents() {
        // 3 × 1.333 = 3.999 → 4.00
        let items = vec![item(1.333, 3.0)];
        assert_eq!(calc_total(&items), 4.0);
    }

    #[test]
    fn test_rounding_half_up_at_exact_boundary() {
        // These literals scale to exactly x.5 in binary and round away
        // from zero
        assert_eq!(round_to_cents(0.005), 0.01);
        assert_eq!(round_to_cents(1.115), 1.12);
        assert_eq!(round_to_cents(2.675), 2.68);
    }

    #[test]
    fn test_rounding_applies_to_the_stored_double() {
        // 1.005 scales to 100.49999999999999 in binary, so this
        // half-cent literal rounds DOWN, not up
        assert_eq!(round_to_cents(1.005), 1.0);
    }

    #[test]
    fn test_binary_drift_does_not_leak_into_the_total() {
        // 0.1 + 0.2 = 0.30000000000000004 before rounding
        let items = vec![item(0.1, 1.0), item(0.2, 1.0)];
        assert_eq!(calc_total(&items), 0.3);
    }
}
