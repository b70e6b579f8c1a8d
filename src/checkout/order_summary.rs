//! Order total computation
//!
//! The order total is the cart subtotal plus the delivery fee that the rate
//! table charges for the selected city at that subtotal.

use super::cart::Cart;
use super::error::CheckoutError;
use crate::shipping::{RateTable, ShippingQuote, ShippingZone};
use crate::simple_types::Amount;

/// Amounts shown on the checkout page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderSummary {
    subtotal: Amount,
    shipping: ShippingQuote,
    total: Amount,
}

impl OrderSummary {
    /// Sum of the cart lines
    #[must_use]
    pub const fn subtotal(&self) -> Amount {
        self.subtotal
    }

    /// Delivery fee
    #[must_use]
    pub const fn shipping_fee(&self) -> Amount {
        self.shipping.fee()
    }

    /// Subtotal plus delivery fee
    #[must_use]
    pub const fn total(&self) -> Amount {
        self.total
    }

    /// Zone of the delivery city, `None` while no city is selected
    #[must_use]
    pub const fn zone(&self) -> Option<ShippingZone> {
        self.shipping.zone()
    }

    /// Full shipping quote behind the fee
    #[must_use]
    pub const fn shipping(&self) -> &ShippingQuote {
        &self.shipping
    }
}

/// Computes subtotal, delivery fee and total for a cart
///
/// # Errors
///
/// - [`CheckoutError::EmptyCart`] if the cart has no lines
/// - [`CheckoutError::Validation`] if an amount leaves the `Amount` range
///
/// # Examples
///
/// ```
/// use storefront_checkout::checkout::{Cart, CartLine, summarize_order};
/// use storefront_checkout::shipping::RateTable;
/// use storefront_checkout::simple_types::{Price, Quantity, String50};
/// use rust_decimal::Decimal;
///
/// let cart = Cart::new(vec![CartLine::new(
///     String50::create("ProductName", "Caftan").unwrap(),
///     Price::create(Decimal::from(350)).unwrap(),
///     Quantity::create(1).unwrap(),
/// )]);
///
/// let summary = summarize_order(&RateTable::default(), Some("Rabat"), &cart).unwrap();
/// assert_eq!(summary.subtotal().value(), Decimal::from(350));
/// assert_eq!(summary.shipping_fee().value(), Decimal::from(45));
/// assert_eq!(summary.total().value(), Decimal::from(395));
/// ```
pub fn summarize_order(
    rate_table: &RateTable,
    city: Option<&str>,
    cart: &Cart,
) -> Result<OrderSummary, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let subtotal = cart.subtotal()?;
    let shipping = rate_table.quote(city, subtotal);
    let total = subtotal.checked_add(shipping.fee())?;

    Ok(OrderSummary {
        subtotal,
        shipping,
        total,
    })
}
