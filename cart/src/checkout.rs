use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::cart::Cart;
use crate::error::CartError;

/// Outcome of a successful checkout, assembled once and never mutated.
///
/// Amounts are plain `f64` with no rounding applied at this layer;
/// `total == subtotal - discount + tax` exactly. `item_count` is the unit
/// count at the time of checkout, captured before the cart is cleared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutResult {
    pub order_id: String,
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    pub total: f64,
    pub item_count: i64,
}

impl Cart {
    /// Runs the checkout pipeline: subtotal, discount, tax on the discounted
    /// amount, order id, clear, confirmation.
    ///
    /// An empty cart fails with [`CartError::EmptyCart`] before any
    /// collaborator is invoked. A discount or tax failure propagates to the
    /// caller and leaves the cart as it was; the cart is cleared only once
    /// tax computation has succeeded. The confirmation send is detached and
    /// never awaited here, so its outcome cannot affect the returned result.
    pub async fn checkout(
        &mut self,
        customer_id: &str,
        location: &str,
    ) -> Result<CheckoutResult, CartError> {
        if self.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let subtotal = self.subtotal();
        let discount = self
            .discounts
            .calculate_discount(subtotal, customer_id)
            .await?;
        let discounted = subtotal - discount;
        // Tax applies to the discounted amount, never the raw subtotal.
        let tax = self.taxes.calculate_tax(discounted, location)?;
        let total = discounted + tax;

        let item_count = self.item_count();
        let order_id = self.order_ids.generate();

        // Clear before notifying, so a notification failure can never leave
        // items behind.
        self.clear();

        let notifier = Arc::clone(&self.notifier);
        let customer = customer_id.to_owned();
        let order = order_id.clone();
        tokio::spawn(async move {
            if let Err(err) = notifier.send_order_confirmation(&customer, &order).await {
                warn!(order_id = %order, error = %err, "failed to send order confirmation");
            }
        });

        Ok(CheckoutResult {
            order_id,
            subtotal,
            discount,
            tax,
            total,
            item_count,
        })
    }
}
