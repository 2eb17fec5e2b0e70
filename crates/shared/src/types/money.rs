//! Money value split into whole units and billionths.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! An amount is stored as an `i64` count of whole units plus an `i32`
//! count of nanos (10^-9 units). The split is canonical when both parts
//! share a sign and `|nanos| < NANOS_PER_UNIT`, but that invariant is
//! checked by the arithmetic layer, not enforced here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};

/// Number of nanos in one whole unit.
pub const NANOS_PER_UNIT: i32 = 1_000_000_000;

/// Largest nanos magnitude allowed in a valid value.
pub const MAX_NANOS: i32 = NANOS_PER_UNIT - 1;

/// Fractional digits carried by the nanos field.
const NANOS_SCALE: u32 = 9;

/// A signed monetary amount in a given currency.
///
/// Any combination of fields is constructible, including ones with
/// mismatched signs or out-of-range nanos. Those values are invalid
/// operands for arithmetic but remain representable so callers can
/// detect them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MoneyValue {
    /// ISO 4217 style currency code (e.g., "USD"). Empty means unspecified.
    #[serde(default)]
    pub currency_code: String,
    /// Whole units of the amount.
    #[serde(default)]
    pub units: i64,
    /// Fractional part in billionths of one unit.
    #[serde(default)]
    pub nanos: i32,
}

impl MoneyValue {
    /// Creates a new money value without checking validity.
    #[must_use]
    pub fn new(units: i64, nanos: i32, currency_code: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
            units,
            nanos,
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency_code: impl Into<String>) -> Self {
        Self::new(0, 0, currency_code)
    }

    /// Returns the exact decimal amount `units + nanos * 10^-9`.
    ///
    /// The fields are combined as-is, so an invalid value yields the
    /// arithmetic sum of its parts.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        // |units * 10^9 + nanos| < 2^94, well inside the 96-bit mantissa.
        let total_nanos =
            i128::from(self.units) * i128::from(NANOS_PER_UNIT) + i128::from(self.nanos);
        Decimal::from_i128_with_scale(total_nanos, NANOS_SCALE)
    }

    /// Splits a decimal amount into canonical units and nanos.
    ///
    /// Never rounds: more than nine significant fractional digits, or a
    /// whole part outside `i64`, is rejected.
    pub fn from_decimal(amount: Decimal, currency_code: impl Into<String>) -> MoneyResult<Self> {
        let normalized = amount.normalize();
        let scale = normalized.scale();
        if scale > NANOS_SCALE {
            return Err(MoneyError::UnrepresentableDecimal(amount));
        }

        let total_nanos = normalized.mantissa() * 10_i128.pow(NANOS_SCALE - scale);
        let per_unit = i128::from(NANOS_PER_UNIT);
        let units = i64::try_from(total_nanos / per_unit)
            .map_err(|_| MoneyError::UnrepresentableDecimal(amount))?;
        let nanos = i32::try_from(total_nanos % per_unit)
            .map_err(|_| MoneyError::UnrepresentableDecimal(amount))?;

        Ok(Self::new(units, nanos, currency_code))
    }
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
