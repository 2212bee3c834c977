//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! The CDF is built on the complementary error function from `statrs`,
//! which is accurate to near machine precision. A simpler polynomial
//! approximation (Abramowitz and Stegun 7.1.26) tops out around 1.5e-7
//! absolute error, which is not tight enough for Greeks at extreme
//! moneyness; the erfc route stays below 1e-9 everywhere on |x| <= 10.

use statrs::function::erf::erfc;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) using the complementary error
/// function.
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x) for standard normal X, in range [0, 1].
///
/// # Accuracy
/// Better than 1e-9 absolute error for all |x| <= 10.
///
/// # Examples
/// ```
/// use optionlab_models::analytical::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0);
/// assert!((cdf_0 - 0.5).abs() < 1e-12);
///
/// let cdf_neg = norm_cdf(-3.0);
/// assert!(cdf_neg < 0.01);
///
/// let cdf_pos = norm_cdf(3.0);
/// assert!(cdf_pos > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    // Φ(x) = 0.5 * erfc(-x / sqrt(2))
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use optionlab_models::analytical::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0);
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}
