use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CartError;
use crate::order_id::{OrderIdGenerator, TimestampOrderIds};
use crate::services::{DiscountCalculator, OrderNotifier, TaxCalculator};

/// Catalogue entry as the cart sees it. The cart stores its own copy, so a
/// later catalogue change never reaches lines already in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// One product and how many units of it are in the cart.
///
/// Invariant: `quantity >= 1`. A line that would drop to zero or below is
/// removed instead, and there is exactly one line per product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i64,
}

impl CartLine {
    /// Extended price of this line (unit price times quantity).
    pub fn line_total(&self) -> f64 {
        common_money::line_total(self.product.price, self.quantity)
    }
}

/// In-memory shopping cart. Lines keep insertion order so displays and tests
/// see a stable sequence.
///
/// The discount, tax, notification and order-id collaborators are injected
/// here and consumed by [`checkout`](Cart::checkout); none of the item
/// operations touch them.
pub struct Cart {
    pub(crate) lines: Vec<CartLine>,
    pub(crate) discounts: Arc<dyn DiscountCalculator>,
    pub(crate) taxes: Arc<dyn TaxCalculator>,
    pub(crate) notifier: Arc<dyn OrderNotifier>,
    pub(crate) order_ids: Arc<dyn OrderIdGenerator>,
}

impl Cart {
    /// Creates an empty cart around the given collaborators, minting order
    /// ids with the default timestamp scheme.
    pub fn new(
        discounts: Arc<dyn DiscountCalculator>,
        taxes: Arc<dyn TaxCalculator>,
        notifier: Arc<dyn OrderNotifier>,
    ) -> Self {
        Self {
            lines: Vec::new(),
            discounts,
            taxes,
            notifier,
            order_ids: Arc::new(TimestampOrderIds),
        }
    }

    /// Replaces the order-id scheme. Tests substitute a fixed generator here.
    pub fn with_order_ids(mut self, order_ids: Arc<dyn OrderIdGenerator>) -> Self {
        self.order_ids = order_ids;
        self
    }

    /// Adds `quantity` units of `product`, merging into the existing line if
    /// the product is already in the cart.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            });
        }
        Ok(())
    }

    /// Removes the matching line. Absent ids are a no-op, not an error.
    pub fn remove_item(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Sets a line's quantity outright (replacement, not increment). Zero or
    /// negative behaves as [`remove_item`](Cart::remove_item); unknown ids
    /// are a no-op.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Snapshot of the current lines. Mutating the returned vector never
    /// touches the cart.
    pub fn items(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    /// The line holding `product_id`, if any.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Sum of price times quantity across all lines, recomputed on every
    /// call. Zero for an empty cart.
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Units across all lines, not distinct products.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Removes all lines unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
