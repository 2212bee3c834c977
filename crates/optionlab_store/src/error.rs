//! Error types for store operations.

use thiserror::Error;
use uuid::Uuid;

/// Calculation store errors.
///
/// # Variants
/// - `Io`: reading or writing the backing file failed
/// - `Format`: the backing file is not valid store JSON
/// - `Csv`: CSV export failed
/// - `NotFound`: no record under the requested identifier
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not valid store JSON.
    #[error("Store format error: {0}")]
    Format(#[from] serde_json::Error),

    /// CSV export failed.
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// No record under the requested identifier.
    #[error("No calculation record with id {id}")]
    NotFound {
        /// The identifier that was looked up
        id: Uuid,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let id = Uuid::nil();
        let err = StoreError::NotFound { id };
        assert!(format!("{}", err).contains(&id.to_string()));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = StoreError::NotFound { id: Uuid::nil() };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: StoreError = io.into();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
