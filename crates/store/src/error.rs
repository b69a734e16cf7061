//! Store error types.

use sarraf_shared::MoneyError;

/// Error types for currency store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No currency matches the lookup key.
    #[error("Currency '{0}' not found")]
    NotFound(String),

    /// A currency with the same id or code already exists.
    #[error("Currency '{0}' already exists")]
    Duplicate(String),

    /// The record does not describe a valid currency.
    #[error("Invalid currency record: {0}")]
    Invalid(#[from] MoneyError),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
