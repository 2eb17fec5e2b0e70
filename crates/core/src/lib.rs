//! Core money logic for Moneta.
//!
//! This crate contains pure arithmetic with ZERO I/O dependencies.
//! Every operation is a deterministic function of its inputs and is safe
//! to call from any number of threads without synchronization.
//!
//! # Modules
//!
//! - `money` - Validity, comparison, negation, and exact summation
//! - `order` - Order totals (cost × quantity plus shipping)

pub mod money;
pub mod order;

pub use money::{
    are_equals, are_same_currency, is_negative, is_positive, is_valid, is_zero, multiply_slow,
    must, negate, sum, sum_all,
};
pub use order::{OrderLine, OrderTotal, order_total};
