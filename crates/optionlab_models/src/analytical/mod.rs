//! Analytical pricing formulas for European options.
//!
//! This module provides the closed-form Black-Scholes solution:
//! - Black-Scholes pricing for lognormal dynamics
//! - Analytical Greeks (Delta, Vega)
//! - Standard normal distribution functions
//!
//! ## Design Principles
//!
//! - **Pure functions**: pricing is deterministic with no side effects
//! - **Guarded edge cases**: zero expiry takes the intrinsic-value branch,
//!   never dividing by zero in the log-moneyness term
//! - **Numerical accuracy**: the normal CDF is erfc-based and accurate to
//!   well below 1e-9 over the practical domain

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::PricingError;
