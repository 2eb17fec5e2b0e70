//! Order total calculation.

use moneta_shared::error::MoneyResult;
use moneta_shared::types::MoneyValue;
use tracing::{debug, warn};

use super::types::{OrderLine, OrderTotal};
use crate::money::{multiply_slow, sum};

/// Totals an order from its shipping cost and priced lines.
///
/// The subtotal starts at zero in the shipping currency, so every line
/// must carry that exact currency code. Any failure aborts the whole
/// calculation; no partial total is returned.
///
/// # Errors
///
/// Returns the first [`MoneyError`](moneta_shared::MoneyError) raised by
/// pricing a line, adding it to the subtotal, or adding shipping.
pub fn order_total(shipping: &MoneyValue, lines: &[OrderLine]) -> MoneyResult<OrderTotal> {
    let mut subtotal = MoneyValue::zero(shipping.currency_code.clone());

    for (index, line) in lines.iter().enumerate() {
        let priced = multiply_slow(&line.cost, line.quantity)
            .and_then(|line_total| sum(&subtotal, &line_total).map(|next| (line_total, next)));

        match priced {
            Ok((line_total, next)) => {
                debug!(
                    line = index,
                    quantity = line.quantity,
                    units = line_total.units,
                    nanos = line_total.nanos,
                    "Priced order line"
                );
                subtotal = next;
            }
            Err(err) => {
                warn!(line = index, error = %err, "Rejected order line");
                return Err(err);
            }
        }
    }

    let total = sum(&subtotal, shipping)?;
    debug!(
        lines = lines.len(),
        currency = %total.currency_code,
        units = total.units,
        nanos = total.nanos,
        "Computed order total"
    );

    Ok(OrderTotal {
        subtotal,
        shipping: shipping.clone(),
        total,
    })
}
