//! CLI error type and result alias.

use thiserror::Error;

use optionlab_models::analytical::PricingError;
use optionlab_risk::{PositionError, SurfaceError};
use optionlab_store::StoreError;

/// Errors surfaced by the command-line layer.
///
/// Wraps the structured errors of the pricing, risk, and store layers
/// together with the CLI's own argument and configuration failures.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument combination the lower layers never see.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pricing domain violation.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Invalid position definition.
    #[error(transparent)]
    Position(#[from] PositionError),

    /// Surface generation failure.
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// Store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Filesystem failure outside the store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output serialisation failure.
    #[error("Serialisation error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used across the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
