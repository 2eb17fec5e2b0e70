//! Common types used across the workspace.

pub mod money;

pub use money::{MAX_NANOS, MoneyValue, NANOS_PER_UNIT};
