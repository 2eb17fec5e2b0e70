//! Exact arithmetic over split units/nanos money values.
//!
//! Every function here is pure: inputs are borrowed, never mutated, and
//! any "changed" value is freshly constructed.
//!
//! - Validity and sign classification
//! - Currency comparison and structural equality
//! - Negation and summation with carry/borrow normalization
//! - The `must` assertion helper

pub mod arithmetic;
pub mod compare;
pub mod must;
pub mod validation;

#[cfg(test)]
mod props;

pub use arithmetic::{multiply_slow, negate, sum, sum_all};
pub use compare::{are_equals, are_same_currency};
pub use must::must;
pub use validation::{is_negative, is_positive, is_valid, is_zero};
