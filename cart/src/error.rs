use thiserror::Error;

/// Errors surfaced by cart mutation and checkout.
///
/// Discount and tax collaborator failures pass through the `Collaborator`
/// variant untouched; the cart does not retry or translate them. Notification
/// failures never appear here at all, they are logged inside the detached
/// send task.
#[derive(Debug, Error)]
pub enum CartError {
    /// A non-positive quantity was passed to `add_item`.
    #[error("quantity must be positive (got {0})")]
    InvalidQuantity(i64),

    /// Checkout was attempted with no line items.
    #[error("cannot checkout empty cart")]
    EmptyCart,

    /// A discount or tax collaborator failed.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}
