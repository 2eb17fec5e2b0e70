//! Negation and exact summation of money values.
//!
//! Summation works on the split representation directly:
//! 1. Add units and nanos field-wise
//! 2. Carry: fold a nanos overflow of ±1 unit into the units total
//! 3. Borrow: when operands had opposite signs, move one unit across so
//!    units and nanos agree in sign again
//!
//! No floating point and no intermediate decimal conversion is involved.

use moneta_shared::error::{MoneyError, MoneyResult};
use moneta_shared::types::{MoneyValue, NANOS_PER_UNIT};

use super::validation::is_valid;

/// Returns the value with both units and nanos sign-flipped.
///
/// Never validates and never fails. `i64::MIN` and `i32::MIN` wrap onto
/// themselves, which keeps negation involutive for every input.
#[must_use]
pub fn negate(m: &MoneyValue) -> MoneyValue {
    MoneyValue::new(
        m.units.wrapping_neg(),
        m.nanos.wrapping_neg(),
        m.currency_code.clone(),
    )
}

/// Adds two money values of the same currency.
///
/// The currency codes must be equal strings; two unspecified (empty)
/// codes count as equal here, unlike in
/// [`are_same_currency`](super::are_same_currency).
///
/// # Errors
///
/// Checked in this order:
/// - [`MoneyError::MismatchingCurrency`] if the codes differ
/// - [`MoneyError::InvalidValue`] if either operand is not valid
/// - [`MoneyError::Overflow`] if the units total leaves the `i64` range
///
/// `{i64::MIN, 0}` is its own [`negate`], so adding it to itself yields
/// zero rather than [`MoneyError::Overflow`].
pub fn sum(l: &MoneyValue, r: &MoneyValue) -> MoneyResult<MoneyValue> {
    if l.currency_code != r.currency_code {
        return Err(MoneyError::MismatchingCurrency {
            left: l.currency_code.clone(),
            right: r.currency_code.clone(),
        });
    }
    if !is_valid(l) || !is_valid(r) {
        return Err(MoneyError::InvalidValue);
    }
    if l.units == i64::MIN && r.units == i64::MIN && l.nanos == 0 && r.nanos == 0 {
        return Ok(MoneyValue::zero(l.currency_code.clone()));
    }

    let mut units = l.units.checked_add(r.units).ok_or(MoneyError::Overflow)?;
    // Both operands are valid, so |nanos| <= 2 * MAX_NANOS < i32::MAX.
    let mut nanos = l.nanos + r.nanos;

    if nanos >= NANOS_PER_UNIT {
        nanos -= NANOS_PER_UNIT;
        units = units.checked_add(1).ok_or(MoneyError::Overflow)?;
    } else if nanos <= -NANOS_PER_UNIT {
        nanos += NANOS_PER_UNIT;
        units = units.checked_sub(1).ok_or(MoneyError::Overflow)?;
    }

    // Borrow only shrinks |units|, so it cannot overflow.
    if units > 0 && nanos < 0 {
        units -= 1;
        nanos += NANOS_PER_UNIT;
    } else if units < 0 && nanos > 0 {
        units += 1;
        nanos -= NANOS_PER_UNIT;
    }

    Ok(MoneyValue::new(units, nanos, l.currency_code.clone()))
}

/// Multiplies a value by a count through repeated [`sum`].
///
/// `n == 0` yields zero in the value's currency. Runs in O(n).
///
/// # Errors
///
/// Returns [`MoneyError::InvalidValue`] for an invalid `m` (even when
/// `n == 0`) and [`MoneyError::Overflow`] if the product leaves the
/// `i64` units range.
pub fn multiply_slow(m: &MoneyValue, n: u32) -> MoneyResult<MoneyValue> {
    if !is_valid(m) {
        return Err(MoneyError::InvalidValue);
    }

    let mut out = MoneyValue::zero(m.currency_code.clone());
    for _ in 0..n {
        out = sum(&out, m)?;
    }
    Ok(out)
}

/// Sums every value, starting from zero in `currency_code`.
///
/// An empty iterator yields that zero. The first failing [`sum`] stops
/// the fold and its error is returned.
pub fn sum_all<'a, I>(values: I, currency_code: impl Into<String>) -> MoneyResult<MoneyValue>
where
    I: IntoIterator<Item = &'a MoneyValue>,
{
    values
        .into_iter()
        .try_fold(MoneyValue::zero(currency_code), |acc, value| sum(&acc, value))
}
