//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! At expiry (T ≤ 0) prices collapse to intrinsic value and both
//! sensitivities are zero.

use serde::Serialize;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::PricingError;
use crate::instruments::{OptionContract, OptionType};

/// Expiry threshold below which contracts are treated as expired.
///
/// Keeps the log-moneyness term away from the σ√T → 0 singularity.
const EXPIRY_EPSILON: f64 = 1e-10;

/// First-order sensitivities of an option price.
///
/// # Fields
/// - `delta`: ∂V/∂S, in [0, 1] for calls and [-1, 0] for puts
/// - `vega`: ∂V/∂σ, non-negative and identical for calls and puts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Greeks {
    /// Delta: ∂V/∂S (sensitivity to spot price).
    pub delta: f64,
    /// Vega: ∂V/∂σ (sensitivity to volatility).
    pub vega: f64,
}

/// Black-Scholes model for European option pricing.
///
/// Provides closed-form pricing and Greeks calculations for European
/// options under lognormal dynamics. Pricing is a pure function:
/// deterministic, side-effect free, same inputs give the same output.
///
/// # Examples
/// ```
/// use optionlab_models::analytical::BlackScholes;
/// use optionlab_models::instruments::{OptionContract, OptionType};
///
/// let model = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let contract = OptionContract::new(100.0, 1.0).unwrap();
///
/// let call = model.price(&contract, OptionType::Call);
/// let put = model.price(&contract, OptionType::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, unconstrained in sign)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `PricingError::InvalidSpot` if spot <= 0
    /// - `PricingError::InvalidVolatility` if volatility <= 0
    ///
    /// # Examples
    /// ```
    /// use optionlab_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, PricingError> {
        if spot <= 0.0 {
            return Err(PricingError::InvalidSpot { spot });
        }
        if volatility <= 0.0 {
            return Err(PricingError::InvalidVolatility { volatility });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// # Returns
    /// The d1 term. Returns large positive/negative values for the
    /// limiting expired cases so that N(d₁) saturates at 1 or 0.
    #[inline]
    pub fn d1(&self, contract: &OptionContract) -> f64 {
        let strike = contract.strike();
        let expiry = contract.expiry();

        if expiry <= EXPIRY_EPSILON {
            // At expiry: S > K gives d1 → +∞, S < K gives d1 → -∞
            return if self.spot > strike {
                100.0
            } else if self.spot < strike {
                -100.0
            } else {
                0.0
            };
        }

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, contract: &OptionContract) -> f64 {
        if contract.expiry() <= EXPIRY_EPSILON {
            return self.d1(contract);
        }
        self.d1(contract) - self.volatility * contract.expiry().sqrt()
    }

    /// Computes the European option price for the given type.
    ///
    /// Dispatches to [`price_call`](Self::price_call) or
    /// [`price_put`](Self::price_put).
    #[inline]
    pub fn price(&self, contract: &OptionContract, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.price_call(contract),
            OptionType::Put => self.price_put(contract),
        }
    }

    /// Computes the European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// At expiry the price is the intrinsic value max(S - K, 0).
    #[inline]
    pub fn price_call(&self, contract: &OptionContract) -> f64 {
        let strike = contract.strike();
        let expiry = contract.expiry();

        if expiry <= EXPIRY_EPSILON {
            return OptionType::Call.intrinsic(self.spot, strike);
        }

        let d1 = self.d1(contract);
        let d2 = self.d2(contract);
        let discount = (-self.rate * expiry).exp();

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes the European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    ///
    /// At expiry the price is the intrinsic value max(K - S, 0).
    #[inline]
    pub fn price_put(&self, contract: &OptionContract) -> f64 {
        let strike = contract.strike();
        let expiry = contract.expiry();

        if expiry <= EXPIRY_EPSILON {
            return OptionType::Put.intrinsic(self.spot, strike);
        }

        let d1 = self.d1(contract);
        let d2 = self.d2(contract);
        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁), in [0, 1]
    /// - Put Delta = -N(-d₁), in [-1, 0]
    ///
    /// At expiry delta is zero: there is no instantaneous sensitivity
    /// left in an expired contract.
    #[inline]
    pub fn delta(&self, contract: &OptionContract, option_type: OptionType) -> f64 {
        if contract.expiry() <= EXPIRY_EPSILON {
            return 0.0;
        }

        let d1 = self.d1(contract);
        match option_type {
            OptionType::Call => norm_cdf(d1),
            OptionType::Put => -norm_cdf(-d1),
        }
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·φ(d₁)·√T
    ///
    /// Vega is identical for calls and puts, non-negative, and zero at
    /// expiry.
    #[inline]
    pub fn vega(&self, contract: &OptionContract) -> f64 {
        let expiry = contract.expiry();
        if expiry <= EXPIRY_EPSILON {
            return 0.0;
        }

        let d1 = self.d1(contract);
        self.spot * norm_pdf(d1) * expiry.sqrt()
    }

    /// Computes Delta and Vega together.
    ///
    /// Shares the d₁ evaluation between the two sensitivities.
    pub fn greeks(&self, contract: &OptionContract, option_type: OptionType) -> Greeks {
        if contract.expiry() <= EXPIRY_EPSILON {
            return Greeks {
                delta: 0.0,
                vega: 0.0,
            };
        }

        let d1 = self.d1(contract);
        let delta = match option_type {
            OptionType::Call => norm_cdf(d1),
            OptionType::Put => -norm_cdf(-d1),
        };
        let vega = self.spot * norm_pdf(d1) * contract.expiry().sqrt();

        Greeks { delta, vega }
    }
}
