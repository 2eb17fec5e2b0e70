//! Order line and total types.

use moneta_shared::types::MoneyValue;
use serde::{Deserialize, Serialize};

/// A priced cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Unit cost of the item.
    pub cost: MoneyValue,
    /// Number of units ordered.
    pub quantity: u32,
}

impl OrderLine {
    /// Creates a new order line.
    #[must_use]
    pub fn new(cost: MoneyValue, quantity: u32) -> Self {
        Self { cost, quantity }
    }
}

/// Breakdown of an order's total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotal {
    /// Sum of every line's cost × quantity.
    pub subtotal: MoneyValue,
    /// Shipping cost.
    pub shipping: MoneyValue,
    /// Subtotal plus shipping.
    pub total: MoneyValue,
}
