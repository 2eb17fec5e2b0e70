//! Validity and sign classification of money values.

use moneta_shared::types::{MAX_NANOS, MoneyValue};

/// Returns true if the value satisfies the units/nanos invariant.
///
/// A value is valid when `nanos` is within `±999_999_999` and does not
/// disagree in sign with `units`. Zero on either side never conflicts,
/// so `{units: 0, nanos: -5}` is valid.
#[must_use]
pub fn is_valid(m: &MoneyValue) -> bool {
    signs_match(m) && nanos_in_range(m.nanos)
}

fn signs_match(m: &MoneyValue) -> bool {
    m.nanos == 0 || m.units == 0 || (m.nanos < 0) == (m.units < 0)
}

fn nanos_in_range(nanos: i32) -> bool {
    (-MAX_NANOS..=MAX_NANOS).contains(&nanos)
}

/// Returns true if both units and nanos are zero.
///
/// Defined for any value: currency and validity are ignored.
#[must_use]
pub fn is_zero(m: &MoneyValue) -> bool {
    m.units == 0 && m.nanos == 0
}

/// Returns true if the value is valid and strictly above zero.
#[must_use]
pub fn is_positive(m: &MoneyValue) -> bool {
    is_valid(m) && (m.units > 0 || (m.units == 0 && m.nanos > 0))
}

/// Returns true if the value is valid and strictly below zero.
///
/// Invalid values report `false`; callers that must tell "negative"
/// apart from "invalid" check [`is_valid`] first.
#[must_use]
pub fn is_negative(m: &MoneyValue) -> bool {
    is_valid(m) && (m.units < 0 || (m.units == 0 && m.nanos < 0))
}
