//! Property-based tests for money arithmetic.
//!
//! - Validity invariant
//! - Zero detection, negation, and currency comparison laws
//! - Summation laws: commutativity, additive inverse, exactness

use moneta_shared::error::MoneyError;
use moneta_shared::types::{MAX_NANOS, MoneyValue, NANOS_PER_UNIT};
use proptest::prelude::*;

use super::*;

/// Strategy to generate a currency code, including the unspecified one.
fn currency_code() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("USD".to_string()),
        Just("EUR".to_string()),
        Just("JPY".to_string()),
    ]
}

/// Strategy to generate any field combination, valid or not.
fn any_money() -> impl Strategy<Value = MoneyValue> {
    (any::<i64>(), any::<i32>(), currency_code())
        .prop_map(|(units, nanos, currency)| MoneyValue::new(units, nanos, currency))
}

/// Strategy to generate valid values in a range where sums cannot overflow.
fn valid_money_in(currency: String) -> impl Strategy<Value = MoneyValue> {
    (
        prop_oneof![-1_000_000_000_000i64..1_000_000_000_000i64, -3i64..3],
        0..=MAX_NANOS,
        any::<bool>(),
    )
        .prop_map(move |(units, nanos, negative_fraction)| {
            // Fraction-only values may take either sign.
            let negative = units < 0 || (units == 0 && negative_fraction);
            let nanos = if negative { -nanos } else { nanos };
            MoneyValue::new(units, nanos, currency.clone())
        })
}

fn valid_money() -> impl Strategy<Value = MoneyValue> {
    currency_code().prop_flat_map(valid_money_in)
}

/// Strategy to generate valid values whose units sit at the `i64` edges.
fn boundary_money() -> impl Strategy<Value = MoneyValue> {
    prop_oneof![
        currency_code().prop_map(|c| MoneyValue::new(i64::MIN, 0, c)),
        (i64::MIN + 1..i64::MIN + 4, 0..=MAX_NANOS, currency_code())
            .prop_map(|(units, nanos, c)| MoneyValue::new(units, -nanos, c)),
        (i64::MAX - 3..=i64::MAX, 0..=MAX_NANOS, currency_code())
            .prop_map(|(units, nanos, c)| MoneyValue::new(units, nanos, c)),
    ]
}

/// Two valid values sharing one currency.
fn valid_pair() -> impl Strategy<Value = (MoneyValue, MoneyValue)> {
    currency_code().prop_flat_map(|c| (valid_money_in(c.clone()), valid_money_in(c)))
}

/// Total amount in nanos, used as the exact reference for summation.
fn total_nanos(m: &MoneyValue) -> i128 {
    i128::from(m.units) * i128::from(NANOS_PER_UNIT) + i128::from(m.nanos)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // =========================================================================
    // Validity and classification
    // =========================================================================

    /// *For any* valid value, nanos is within range and never disagrees in
    /// sign with a non-zero units field.
    #[test]
    fn prop_valid_values_have_consistent_signs(m in any_money()) {
        if is_valid(&m) {
            prop_assert!(m.nanos.unsigned_abs() < NANOS_PER_UNIT.unsigned_abs());
            let signs_agree = i64::from(m.nanos.signum()) == m.units.signum();
            prop_assert!(m.nanos == 0 || m.units == 0 || signs_agree);
        }
    }

    /// *For any* currency, `{0, 0}` is zero.
    #[test]
    fn prop_zero_ignores_currency(currency in currency_code()) {
        prop_assert!(is_zero(&MoneyValue::zero(currency)));
    }

    /// *For any* value, positive and negative are mutually exclusive and
    /// both false for zero or invalid input.
    #[test]
    fn prop_classification_is_exclusive(m in any_money()) {
        prop_assert!(!(is_positive(&m) && is_negative(&m)));
        if is_zero(&m) || !is_valid(&m) {
            prop_assert!(!is_positive(&m));
            prop_assert!(!is_negative(&m));
        }
    }

    // =========================================================================
    // Negation and comparison
    // =========================================================================

    /// *For any* value, negating twice is the identity and the currency is
    /// preserved.
    #[test]
    fn prop_negate_is_involutive(m in any_money()) {
        let negated = negate(&m);
        prop_assert_eq!(&negated.currency_code, &m.currency_code);
        prop_assert!(are_equals(&negate(&negated), &m));
    }

    /// *For any* value, `m` equals its negation only when it is zero.
    #[test]
    fn prop_negation_not_folded_into_equality(m in valid_money()) {
        prop_assert_eq!(are_equals(&m, &negate(&m)), is_zero(&m));
    }

    /// *For any* pair of unspecified-currency values, the currency does
    /// not count as the same.
    #[test]
    fn prop_empty_currency_never_same(l in valid_money_in(String::new()), r in valid_money_in(String::new())) {
        prop_assert!(!are_same_currency(&l, &r));
    }

    // =========================================================================
    // Summation
    // =========================================================================

    /// *For any* two valid same-currency values, the sum is valid and equal
    /// to the exact total in nanos.
    #[test]
    fn prop_sum_is_exact_and_valid((l, r) in valid_pair()) {
        let result = sum(&l, &r).unwrap();
        prop_assert!(is_valid(&result));
        prop_assert_eq!(total_nanos(&result), total_nanos(&l) + total_nanos(&r));
        prop_assert_eq!(&result.currency_code, &l.currency_code);
    }

    /// *For any* two valid same-currency values, sum is commutative.
    #[test]
    fn prop_sum_is_commutative((l, r) in valid_pair()) {
        prop_assert_eq!(sum(&l, &r), sum(&r, &l));
    }

    /// *For any* valid value, adding its negation yields zero in its currency.
    #[test]
    fn prop_sum_with_negation_is_zero(m in valid_money()) {
        let expected = MoneyValue::zero(m.currency_code.clone());
        prop_assert_eq!(sum(&m, &negate(&m)), Ok(expected));
    }

    /// *For any* valid value at the units edges whose negation is valid,
    /// adding the negation still yields zero instead of overflowing.
    #[test]
    fn prop_sum_with_negation_is_zero_at_bounds(m in boundary_money()) {
        prop_assert!(is_valid(&m));
        let expected = MoneyValue::zero(m.currency_code.clone());
        prop_assert_eq!(sum(&m, &negate(&m)), Ok(expected));
    }

    /// *For any* invalid operand, sum fails with `InvalidValue` when the
    /// currencies agree.
    #[test]
    fn prop_sum_rejects_invalid(m in any_money(), other in valid_money()) {
        prop_assume!(!is_valid(&m));
        let other = MoneyValue::new(other.units, other.nanos, m.currency_code.clone());
        prop_assert_eq!(sum(&m, &other), Err(MoneyError::InvalidValue));
        prop_assert_eq!(sum(&other, &m), Err(MoneyError::InvalidValue));
    }

    /// *For any* differing currency codes, sum fails with
    /// `MismatchingCurrency` regardless of the amounts.
    #[test]
    fn prop_sum_rejects_currency_mismatch(l in any_money(), r in any_money()) {
        prop_assume!(l.currency_code != r.currency_code);
        let is_mismatch = matches!(sum(&l, &r), Err(MoneyError::MismatchingCurrency { .. }));
        prop_assert!(is_mismatch);
    }

    /// *For any* valid value and small count, multiply_slow matches the
    /// exact product.
    #[test]
    fn prop_multiply_slow_is_exact(m in valid_money(), n in 0u32..20) {
        let result = multiply_slow(&m, n).unwrap();
        prop_assert!(is_valid(&result));
        prop_assert_eq!(total_nanos(&result), total_nanos(&m) * i128::from(n));
    }
}
