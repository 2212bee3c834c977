//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `PricingError`: domain violations detected at the pricing boundary

use thiserror::Error;

/// Analytical pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode. These are deterministic
/// input errors, not recoverable runtime faults: the pricing engine
/// refuses to divide by zero or propagate NaN/Inf, and signals the
/// violation to its caller instead.
///
/// # Variants
/// - `InvalidSpot`: non-positive spot price
/// - `InvalidVolatility`: non-positive volatility
/// - `InvalidStrike`: non-positive strike price
/// - `InvalidExpiry`: negative time to expiry
///
/// # Examples
/// ```
/// use optionlab_models::analytical::PricingError;
///
/// let err = PricingError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike price value
        strike: f64,
    },

    /// Invalid time to expiry (negative).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_spot_display() {
        let err = PricingError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_volatility_display() {
        let err = PricingError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = PricingError::InvalidStrike { strike: 0.0 };
        assert_eq!(format!("{}", err), "Invalid strike price: K = 0");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = PricingError::InvalidExpiry { expiry: -1.0 };
        assert_eq!(format!("{}", err), "Invalid expiry: T = -1");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidSpot { spot: 0.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::InvalidVolatility { volatility: 0.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
