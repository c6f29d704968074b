//! Checkout core for the storefront: an in-memory shopping cart plus the
//! checkout computation that combines the cart subtotal with an externally
//! supplied discount and tax into a [`CheckoutResult`]. Discount, tax,
//! notification and order-id generation are collaborator traits injected at
//! construction, so any conforming implementation (including test doubles)
//! can stand in.
//!
//! Amounts are plain `f64` and flow through unrounded: `total = subtotal -
//! discount + tax`, exactly. A [`Cart`] has a single logical owner; every
//! mutating operation, checkout included, takes `&mut self`, so nothing can
//! interleave with the awaited discount call. Share a cart across tasks only
//! behind your own `Mutex`.

pub mod cart;
pub mod checkout;
pub mod error;
pub mod order_id;
pub mod services;

pub use cart::{Cart, CartLine, Product};
pub use checkout::CheckoutResult;
pub use error::CartError;
pub use order_id::{OrderIdGenerator, TimestampOrderIds};
pub use services::{
    DiscountCalculator, LoggingNotifier, OrderNotifier, RegionTaxTable, StandardDiscounts,
    TaxCalculator,
};
