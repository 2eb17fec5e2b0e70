//! Order totals built on exact money arithmetic.
//!
//! Prices each line as cost × quantity and adds the shipping quote, the
//! way a checkout flow totals a cart.

pub mod total;
pub mod types;


pub use total::order_total;
pub use types::{OrderLine, OrderTotal};
