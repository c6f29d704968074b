//! Float-money helpers shared by the storefront crates.
//!
//! The checkout core carries amounts as plain `f64` and imposes no rounding of
//! its own, so there is no `Money` wrapper here. These helpers exist so the
//! core and its tests agree on how a line total is formed and on how two
//! floating amounts are compared.

/// Extended price of a single cart line (unit price times quantity).
pub fn line_total(unit_price: f64, quantity: i64) -> f64 {
    unit_price * quantity as f64
}

/// Compare two monetary values allowing a tolerance (in cents).
pub fn nearly_equal(a: f64, b: f64, cents_tolerance: i64) -> bool {
    ((a - b) * 100.0).abs() <= cents_tolerance as f64
}

/// Cents view of an amount, for display and reporting only. The result never
/// feeds back into totals arithmetic.
pub fn as_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Render an amount with two decimal places.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}
