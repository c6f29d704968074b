//! Shared doubles and fixtures for the cart integration tests.
//!
//! Manual doubles rather than a mocking crate: the collaborator traits take
//! `&str` parameters, which macro-generated mocks handle poorly, and a
//! hand-written recorder keeps exactly the call data each test needs.
#![allow(dead_code)] // each test binary pulls in its own subset

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use cart_core::{DiscountCalculator, OrderIdGenerator, OrderNotifier, Product, TaxCalculator};

// Canonical catalogue used across the suites.

pub fn laptop() -> Product {
    Product {
        id: "laptop-1".to_string(),
        name: "Gaming Laptop".to_string(),
        price: 1200.0,
    }
}

pub fn mouse() -> Product {
    Product {
        id: "mouse-1".to_string(),
        name: "Wireless Mouse".to_string(),
        price: 50.0,
    }
}

pub fn keyboard() -> Product {
    Product {
        id: "keyboard-1".to_string(),
        name: "Mechanical Keyboard".to_string(),
        price: 150.0,
    }
}

/// Discount double returning a configured amount and recording every
/// (subtotal, customer_id) it receives.
pub struct FixedDiscount {
    amount: f64,
    calls: Mutex<Vec<(f64, String)>>,
}

impl FixedDiscount {
    pub fn new(amount: f64) -> Arc<Self> {
        Arc::new(Self {
            amount,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(f64, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiscountCalculator for FixedDiscount {
    async fn calculate_discount(&self, subtotal: f64, customer_id: &str) -> Result<f64> {
        self.calls
            .lock()
            .unwrap()
            .push((subtotal, customer_id.to_string()));
        Ok(self.amount)
    }
}

/// Discount double that always fails.
pub struct FailingDiscount;

#[async_trait]
impl DiscountCalculator for FailingDiscount {
    async fn calculate_discount(&self, _subtotal: f64, _customer_id: &str) -> Result<f64> {
        Err(anyhow!("discount service unavailable"))
    }
}

/// Tax double returning a configured amount and recording every
/// (amount, location) it receives.
pub struct FixedTax {
    amount: f64,
    calls: Mutex<Vec<(f64, String)>>,
}

impl FixedTax {
    pub fn new(amount: f64) -> Arc<Self> {
        Arc::new(Self {
            amount,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(f64, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TaxCalculator for FixedTax {
    fn calculate_tax(&self, amount: f64, location: &str) -> Result<f64> {
        self.calls
            .lock()
            .unwrap()
            .push((amount, location.to_string()));
        Ok(self.amount)
    }
}

/// Tax double that always fails.
pub struct FailingTax;

impl TaxCalculator for FailingTax {
    fn calculate_tax(&self, _amount: f64, _location: &str) -> Result<f64> {
        Err(anyhow!("tax region lookup failed"))
    }
}

/// Notifier recording every confirmation it is asked to send.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderNotifier for RecordingNotifier {
    async fn send_order_confirmation(&self, customer_id: &str, order_id: &str) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((customer_id.to_string(), order_id.to_string()));
        Ok(())
    }
}

/// Notifier that always fails, for the swallowed-error path.
pub struct FailingNotifier;

#[async_trait]
impl OrderNotifier for FailingNotifier {
    async fn send_order_confirmation(&self, _customer_id: &str, _order_id: &str) -> Result<()> {
        Err(anyhow!("email service down"))
    }
}

/// Id generator pinned to a single value.
pub struct FixedOrderIds(pub &'static str);

impl OrderIdGenerator for FixedOrderIds {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

/// Lets the detached confirmation task run to completion. The doubles above
/// finish immediately, so yielding a few times is enough on the test runtime.
pub async fn settle_notifications() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}
