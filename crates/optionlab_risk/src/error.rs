//! Error types for position and surface operations.
//!
//! This module provides:
//! - `PositionError`: invalid position definitions
//! - `SurfaceError`: degenerate sweep ranges and propagated pricing errors

use optionlab_models::analytical::PricingError;
use thiserror::Error;

/// Position definition errors.
///
/// # Variants
/// - `InvalidQuantity`: quantity of zero contracts
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PositionError {
    /// Quantity must be at least one contract.
    #[error("Invalid quantity: {quantity} (must be >= 1)")]
    InvalidQuantity {
        /// The rejected quantity value
        quantity: u32,
    },
}

/// PnL surface generation errors.
///
/// All variants are deterministic input errors detected before or during
/// the sweep; none of them leaves a partially-filled surface behind.
///
/// # Variants
/// - `DegenerateRange`: axis range with min >= max
/// - `InvalidResolution`: fewer than two points per axis
/// - `Pricing`: a cell evaluation hit a pricing domain violation
///
/// # Examples
/// ```
/// use optionlab_risk::{AxisRange, SurfaceError};
///
/// let err = AxisRange::new(1.0, 1.0).unwrap_err();
/// assert!(matches!(err, SurfaceError::DegenerateRange { .. }));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SurfaceError {
    /// Axis range bounds are inverted or equal.
    #[error("Degenerate range: [{min}, {max}] (min must be < max)")]
    DegenerateRange {
        /// Lower bound of the rejected range
        min: f64,
        /// Upper bound of the rejected range
        max: f64,
    },

    /// Resolution too low to span a range.
    #[error("Invalid resolution: {resolution} (must be >= 2)")]
    InvalidResolution {
        /// The rejected resolution
        resolution: usize,
    },

    /// A sweep cell violated the pricing domain.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}
