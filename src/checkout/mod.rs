//! Cart subtotal and order total
//!
//! - [`Cart`] / [`CartLine`] - cart contents with range-checked totals
//! - [`summarize_order`] - subtotal, delivery fee and total for a cart
//! - [`CheckoutError`] - why a summary could not be produced

mod cart;
mod error;
mod order_summary;

pub use cart::{Cart, CartLine};
pub use error::CheckoutError;
pub use order_summary::{OrderSummary, summarize_order};
