//! Money error types.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by amount parsing, money arithmetic, and currency handling.
///
/// Every variant is returned synchronously by the offending call. None of them
/// leave a partially constructed value behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Currency Errors ==========
    /// Operands of a binary operation are not the same currency.
    #[error("Currency mismatch: expected {expected}, got {found}")]
    CurrencyMismatch {
        /// Currency code of the left-hand operand.
        expected: String,
        /// Currency code of the right-hand operand.
        found: String,
    },

    /// Currency definition is unusable (empty code, scale out of range).
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    // ========== Arithmetic Errors ==========
    /// The operation would lose precision and no rounding mode allows it.
    #[error("Rounding is required: {0}")]
    RoundingRequired(String),

    /// Divisor is zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Result magnitude cannot be represented exactly.
    #[error("Arithmetic overflow")]
    Overflow,

    // ========== Input Errors ==========
    /// Supplied value cannot be parsed as an exact number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Context and rounding mode combination is not allowed.
    #[error("Invalid context: {0}")]
    InvalidContext(String),

    /// Allocation parts or ratios are unusable.
    #[error("Invalid allocation: {0}")]
    InvalidAllocation(String),
}

impl MoneyError {
    /// Creates a `CurrencyMismatch` from the two currency codes.
    #[must_use]
    pub fn mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::InvalidCurrency(_) => "INVALID_CURRENCY",
            Self::RoundingRequired(_) => "ROUNDING_REQUIRED",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Overflow => "OVERFLOW",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::InvalidContext(_) => "INVALID_CONTEXT",
            Self::InvalidAllocation(_) => "INVALID_ALLOCATION",
        }
    }

    /// Returns true if retrying with an explicit rounding mode could succeed.
    #[must_use]
    pub const fn needs_rounding_mode(&self) -> bool {
        matches!(self, Self::RoundingRequired(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            MoneyError::mismatch("USD", "EUR").error_code(),
            "CURRENCY_MISMATCH"
        );
        assert_eq!(
            MoneyError::InvalidCurrency(String::new()).error_code(),
            "INVALID_CURRENCY"
        );
        assert_eq!(
            MoneyError::RoundingRequired(String::new()).error_code(),
            "ROUNDING_REQUIRED"
        );
        assert_eq!(MoneyError::DivisionByZero.error_code(), "DIVISION_BY_ZERO");
        assert_eq!(MoneyError::Overflow.error_code(), "OVERFLOW");
        assert_eq!(
            MoneyError::InvalidAmount(String::new()).error_code(),
            "INVALID_AMOUNT"
        );
        assert_eq!(
            MoneyError::InvalidContext(String::new()).error_code(),
            "INVALID_CONTEXT"
        );
        assert_eq!(
            MoneyError::InvalidAllocation(String::new()).error_code(),
            "INVALID_ALLOCATION"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoneyError::mismatch("USD", "EUR").to_string(),
            "Currency mismatch: expected USD, got EUR"
        );
        assert_eq!(
            MoneyError::RoundingRequired("1.005 to scale 2".into()).to_string(),
            "Rounding is required: 1.005 to scale 2"
        );
        assert_eq!(MoneyError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(
            MoneyError::InvalidAmount("abc".into()).to_string(),
            "Invalid amount: abc"
        );
    }

    #[test]
    fn test_needs_rounding_mode() {
        assert!(MoneyError::RoundingRequired("x".into()).needs_rounding_mode());
        assert!(!MoneyError::DivisionByZero.needs_rounding_mode());
        assert!(!MoneyError::mismatch("USD", "EUR").needs_rounding_mode());
    }
}
