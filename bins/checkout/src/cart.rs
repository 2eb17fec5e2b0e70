//! Cart file loading and currency checks.

use std::path::Path;

use anyhow::{Context, bail};
use moneta_core::OrderLine;
use moneta_shared::MoneyValue;
use serde::Deserialize;

/// A cart as decoded from its JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct Cart {
    /// Shipping quote for the whole cart.
    pub shipping: MoneyValue,
    /// Priced lines.
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

impl Cart {
    /// Reads and decodes a cart file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read cart file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse cart file {}", path.display()))
    }

    /// Ensures shipping and every line are priced in `currency`.
    pub fn ensure_currency(&self, currency: &str) -> anyhow::Result<()> {
        if self.shipping.currency_code != currency {
            bail!(
                "shipping is priced in '{}', expected '{currency}'",
                self.shipping.currency_code
            );
        }
        if let Some((index, line)) = self
            .items
            .iter()
            .enumerate()
            .find(|(_, line)| line.cost.currency_code != currency)
        {
            bail!(
                "item {index} is priced in '{}', expected '{currency}'",
                line.cost.currency_code
            );
        }
        Ok(())
    }
}
