//! Assertion helper for call sites that already guarantee success.

use moneta_shared::error::MoneyResult;
use moneta_shared::types::MoneyValue;

/// Returns the value of a money computation known to succeed.
///
/// Only for call sites where an upstream invariant makes failure
/// impossible, such as summing values just checked with
/// [`is_valid`](super::is_valid) in a shared currency. Any error is
/// treated as a programming defect.
///
/// # Panics
///
/// Panics with the error as payload when `result` is `Err`.
#[track_caller]
pub fn must(result: MoneyResult<MoneyValue>) -> MoneyValue {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(error = %err, code = err.error_code(), "money invariant violated");
            panic!("money invariant violated: {err}");
        }
    }
}
