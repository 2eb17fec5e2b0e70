//! Moneta checkout calculator
//!
//! Totals a cart file with exact money arithmetic and prints the
//! breakdown as JSON.
//!
//! Usage: cargo run --bin checkout -- --cart cart.json

mod cart;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moneta_core::order_total;
use moneta_shared::AppConfig;

use crate::cart::Cart;

#[derive(Debug, Parser)]
#[command(name = "checkout")]
#[command(about = "Compute an order total from a cart file")]
struct Args {
    /// Path to the cart JSON file.
    #[arg(short, long)]
    cart: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cart = Cart::load(&args.cart)?;
    cart.ensure_currency(&config.checkout.currency)?;
    info!(
        path = %args.cart.display(),
        items = cart.items.len(),
        currency = %config.checkout.currency,
        "Loaded cart"
    );

    let totals = order_total(&cart.shipping, &cart.items).context("Failed to total order")?;
    info!(
        units = totals.total.units,
        nanos = totals.total.nanos,
        "Order totalled"
    );

    println!("{}", serde_json::to_string_pretty(&totals)?);

    Ok(())
}
