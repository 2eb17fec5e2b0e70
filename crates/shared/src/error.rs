//! Money error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors returned by money arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// An operand violates the units/nanos sign or range invariant.
    #[error("one of the specified money values is invalid")]
    InvalidValue,

    /// Operand currency codes are unequal strings.
    #[error("mismatching currency codes: '{left}' and '{right}'")]
    MismatchingCurrency {
        /// Currency code of the left operand.
        left: String,
        /// Currency code of the right operand.
        right: String,
    },

    /// The whole-unit total does not fit in `i64`.
    #[error("money value overflows the units range")]
    Overflow,

    /// A decimal amount cannot be split exactly into units and nanos.
    #[error("decimal {0} cannot be represented as units and nanos")]
    UnrepresentableDecimal(Decimal),
}

impl MoneyError {
    /// Returns the stable error code for diagnostics and API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidValue => "INVALID_VALUE",
            Self::MismatchingCurrency { .. } => "MISMATCHING_CURRENCY",
            Self::Overflow => "OVERFLOW",
            Self::UnrepresentableDecimal(_) => "UNREPRESENTABLE_DECIMAL",
        }
    }
}
