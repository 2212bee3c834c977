//! Option instrument definitions.
//!
//! This module provides:
//! - `OptionType`: call/put discriminant with payoff sign conventions
//! - `OptionContract`: validated strike/expiry pair

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analytical::error::PricingError;

/// Type of European option payoff.
///
/// Determines the sign conventions used in both pricing and Greeks.
///
/// # Variants
/// - `Call`: right to buy, payoff max(S - K, 0)
/// - `Put`: right to sell, payoff max(K - S, 0)
///
/// # Examples
/// ```
/// use optionlab_models::instruments::OptionType;
///
/// let call = OptionType::Call;
/// assert!((call.intrinsic(110.0, 100.0) - 10.0).abs() < 1e-12);
/// assert_eq!(call.to_string(), "call");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Intrinsic value of the option at spot `spot` and strike `strike`.
    ///
    /// This is the value of the option at immediate expiry:
    /// max(S - K, 0) for a call, max(K - S, 0) for a put.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Both option types, in (call, put) order.
    ///
    /// Convenient for sweeps that price every contract both ways.
    pub const BOTH: [OptionType; 2] = [OptionType::Call, OptionType::Put];
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(format!("unknown option type: {other} (expected call or put)")),
        }
    }
}

/// A European option contract: strike and time to expiry.
///
/// Validated at construction so that pricing code can assume
/// `strike > 0` and `expiry >= 0`. An expiry of exactly zero is legal
/// and selects the intrinsic-value branch of the pricing formulas.
///
/// # Examples
/// ```
/// use optionlab_models::instruments::OptionContract;
///
/// let contract = OptionContract::new(100.0, 0.5).unwrap();
/// assert_eq!(contract.strike(), 100.0);
/// assert_eq!(contract.expiry(), 0.5);
///
/// // Expired contracts are allowed
/// assert!(OptionContract::new(100.0, 0.0).is_ok());
///
/// // Non-positive strikes are not
/// assert!(OptionContract::new(0.0, 0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    strike: f64,
    expiry: f64,
}

impl OptionContract {
    /// Creates a new contract with validation.
    ///
    /// # Arguments
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to expiry in years (must be non-negative)
    ///
    /// # Errors
    /// - `PricingError::InvalidStrike` if `strike <= 0`
    /// - `PricingError::InvalidExpiry` if `expiry < 0`
    pub fn new(strike: f64, expiry: f64) -> Result<Self, PricingError> {
        if strike <= 0.0 {
            return Err(PricingError::InvalidStrike { strike });
        }
        if expiry < 0.0 {
            return Err(PricingError::InvalidExpiry { expiry });
        }
        Ok(Self { strike, expiry })
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }
}
