//! Collaborator contracts consumed by checkout, plus the reference
//! implementations the demos and state-based tests share.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Computes the discount for an order, given the pre-discount subtotal and
/// the customer placing it. Errors propagate to the checkout caller.
#[async_trait]
pub trait DiscountCalculator: Send + Sync {
    async fn calculate_discount(&self, subtotal: f64, customer_id: &str) -> Result<f64>;
}

/// Computes tax on an amount for a location. Checkout hands this the
/// post-discount amount, never the raw subtotal. Errors propagate to the
/// checkout caller.
pub trait TaxCalculator: Send + Sync {
    fn calculate_tax(&self, amount: f64, location: &str) -> Result<f64>;
}

/// Delivers the order confirmation. Checkout issues this fire-and-forget:
/// the call is never awaited on the checkout path and its errors are logged,
/// not surfaced.
#[async_trait]
pub trait OrderNotifier: Send + Sync {
    async fn send_order_confirmation(&self, customer_id: &str, order_id: &str) -> Result<()>;
}

/// House discount policy: VIP customers get 10%, any order over 500 gets a
/// flat 50, everyone else pays full price.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardDiscounts;

#[async_trait]
impl DiscountCalculator for StandardDiscounts {
    async fn calculate_discount(&self, subtotal: f64, customer_id: &str) -> Result<f64> {
        if customer_id.contains("vip") {
            return Ok(subtotal * 0.1);
        }
        if subtotal > 500.0 {
            return Ok(50.0);
        }
        Ok(0.0)
    }
}

/// Flat-rate tax table keyed by location code, with a fallback rate for
/// locations it does not know.
#[derive(Debug, Clone)]
pub struct RegionTaxTable {
    rates: HashMap<String, f64>,
    default_rate: f64,
}

impl RegionTaxTable {
    pub fn new(rates: HashMap<String, f64>, default_rate: f64) -> Self {
        Self {
            rates,
            default_rate,
        }
    }

    /// The rates the demos run with: US 8%, CA 12%, EU 20%, 5% elsewhere.
    pub fn standard() -> Self {
        let rates = HashMap::from([
            ("US".to_string(), 0.08),
            ("CA".to_string(), 0.12),
            ("EU".to_string(), 0.20),
        ]);
        Self::new(rates, 0.05)
    }
}

impl TaxCalculator for RegionTaxTable {
    fn calculate_tax(&self, amount: f64, location: &str) -> Result<f64> {
        let rate = self.rates.get(location).copied().unwrap_or(self.default_rate);
        Ok(amount * rate)
    }
}

/// Notifier that only logs the confirmation; stands in for a real mail or
/// SMS integration.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

#[async_trait]
impl OrderNotifier for LoggingNotifier {
    async fn send_order_confirmation(&self, customer_id: &str, order_id: &str) -> Result<()> {
        info!(customer_id, order_id, "order confirmation sent");
        Ok(())
    }
}
