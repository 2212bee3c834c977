//! # optionlab_models: European Option Instruments and Analytical Pricing
//!
//! ## Pricing Layer Role
//!
//! optionlab_models is the bottom layer of the workspace, providing:
//! - Option instrument types: `OptionType`, `OptionContract` (`instruments`)
//! - Standard normal distribution functions (`analytical::distributions`)
//! - Closed-form Black-Scholes pricing and Greeks (`analytical::black_scholes`)
//! - Error types: `PricingError` (`analytical::error`)
//!
//! This layer has no dependencies on other optionlab_* crates, with minimal
//! external dependencies:
//! - statrs: high-accuracy error function for the normal CDF
//! - thiserror: structured error types
//! - serde: serialisation of instrument types and results
//!
//! ## Usage Examples
//!
//! ```rust
//! use optionlab_models::analytical::BlackScholes;
//! use optionlab_models::instruments::{OptionContract, OptionType};
//!
//! let model = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
//! let contract = OptionContract::new(100.0, 1.0).unwrap();
//!
//! let call = model.price(&contract, OptionType::Call);
//! let put = model.price(&contract, OptionType::Put);
//!
//! // Put-call parity: C - P = S - K*exp(-rT)
//! let forward = 100.0 - 100.0 * (-0.05_f64).exp();
//! assert!((call - put - forward).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;

pub use analytical::{BlackScholes, Greeks, PricingError};
pub use instruments::{OptionContract, OptionType};
