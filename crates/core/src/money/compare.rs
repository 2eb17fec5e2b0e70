//! Currency comparison and structural equality.

use moneta_shared::types::MoneyValue;

/// Returns true if both values carry the same, specified currency.
///
/// An empty code never matches, not even another empty code. This is
/// stricter than the check [`sum`](super::sum) applies to its operands.
#[must_use]
pub fn are_same_currency(l: &MoneyValue, r: &MoneyValue) -> bool {
    !l.currency_code.is_empty() && l.currency_code == r.currency_code
}

/// Returns true if currency, units and nanos are all identical.
///
/// No normalization happens first.
#[must_use]
pub fn are_equals(l: &MoneyValue, r: &MoneyValue) -> bool {
    l.currency_code == r.currency_code && l.units == r.units && l.nanos == r.nanos
}
