//! Option position and PnL calculation.

use serde::{Deserialize, Serialize};

use crate::error::PositionError;

/// An option position: entry price and number of contracts.
///
/// Independent of the option parameters themselves; the same position
/// can be marked against any fair price. Quantity is validated at
/// construction so PnL never silently multiplies by a non-positive
/// size.
///
/// # Examples
/// ```
/// use optionlab_risk::Position;
///
/// let position = Position::new(5.0, 2).unwrap();
///
/// // PnL = (fair - purchase) * quantity
/// assert_eq!(position.pnl(8.0), 6.0);
///
/// // A worthless option is a loss of the full premium
/// assert_eq!(position.pnl(0.0), -10.0);
///
/// assert!(Position::new(5.0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    purchase_price: f64,
    quantity: u32,
}

impl Position {
    /// Creates a new position with validation.
    ///
    /// # Arguments
    /// * `purchase_price` - Price paid per contract (unconstrained in sign)
    /// * `quantity` - Number of contracts (must be >= 1)
    ///
    /// # Errors
    /// - `PositionError::InvalidQuantity` if `quantity == 0`
    pub fn new(purchase_price: f64, quantity: u32) -> Result<Self, PositionError> {
        if quantity == 0 {
            return Err(PositionError::InvalidQuantity { quantity });
        }
        Ok(Self {
            purchase_price,
            quantity,
        })
    }

    /// Returns the purchase price per contract.
    #[inline]
    pub fn purchase_price(&self) -> f64 {
        self.purchase_price
    }

    /// Returns the number of contracts.
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Profit or loss of the position at the given fair price.
    ///
    /// Computed as `(fair_price - purchase_price) * quantity`. Pure
    /// function with no failure modes: quantity positivity was enforced
    /// at construction.
    #[inline]
    pub fn pnl(&self, fair_price: f64) -> f64 {
        (fair_price - self.purchase_price) * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let position = Position::new(5.0, 3).unwrap();
        assert_eq!(position.purchase_price(), 5.0);
        assert_eq!(position.quantity(), 3);
    }

    #[test]
    fn test_new_zero_quantity_rejected() {
        assert!(matches!(
            Position::new(5.0, 0),
            Err(PositionError::InvalidQuantity { quantity: 0 })
        ));
    }

    #[test]
    fn test_negative_purchase_price_allowed() {
        // A negative entry price models having been paid to take the position
        let position = Position::new(-2.0, 1).unwrap();
        assert_eq!(position.pnl(1.0), 3.0);
    }

    #[test]
    fn test_pnl_identity_at_entry() {
        // pnl(price, price, q) == 0 for any price and quantity
        for price in [-3.0, 0.0, 2.46, 100.0] {
            for quantity in [1, 2, 10] {
                let position = Position::new(price, quantity).unwrap();
                assert_eq!(position.pnl(price), 0.0);
            }
        }
    }

    #[test]
    fn test_pnl_free_entry_returns_fair_price() {
        // pnl(p, 0, 1) == p
        let position = Position::new(0.0, 1).unwrap();
        for fair in [0.0, 1.5, 9.49, -1.0] {
            assert_eq!(position.pnl(fair), fair);
        }
    }

    #[test]
    fn test_pnl_scales_with_quantity() {
        let single = Position::new(5.0, 1).unwrap();
        let block = Position::new(5.0, 7).unwrap();
        assert_eq!(block.pnl(8.0), 7.0 * single.pnl(8.0));
    }

    #[test]
    fn test_pnl_loss_sign() {
        let position = Position::new(5.0, 2).unwrap();
        assert_eq!(position.pnl(3.0), -4.0);
    }
}
