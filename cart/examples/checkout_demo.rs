//! Wires the reference collaborators together and runs one checkout.
//!
//! Run with `cargo run --example checkout_demo`; set `RUST_LOG=info` to see
//! the confirmation log line from the notifier.

use std::sync::Arc;

use cart_core::{Cart, LoggingNotifier, Product, RegionTaxTable, StandardDiscounts};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let mut cart = Cart::new(
        Arc::new(StandardDiscounts),
        Arc::new(RegionTaxTable::standard()),
        Arc::new(LoggingNotifier),
    );

    cart.add_item(
        &Product {
            id: "laptop-1".to_string(),
            name: "Gaming Laptop".to_string(),
            price: 1200.0,
        },
        1,
    )?;
    cart.add_item(
        &Product {
            id: "mouse-1".to_string(),
            name: "Wireless Mouse".to_string(),
            price: 50.0,
        },
        2,
    )?;

    let result = cart.checkout("vip-customer-456", "EU").await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    // Give the detached confirmation task a moment before the runtime exits.
    tokio::task::yield_now().await;
    Ok(())
}
