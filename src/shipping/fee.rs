//! Shipping fee calculation against the default rate table

use super::rate_table::default_rate_table;
use crate::simple_types::Amount;

/// Calculates the delivery fee using the default rate table
///
/// | Zone | Cities | Flat cost | Free from |
/// |------|--------|-----------|-----------|
/// | Zone1 | Casablanca, Mohammédia | 25 | 400 |
/// | Zone2 | any other city | 45 | 600 |
///
/// An absent or empty city yields `0`, the same value as free delivery. Use
/// [`RateTable::quote`](super::RateTable::quote) when the difference matters.
///
/// # Examples
///
/// ```
/// use storefront_checkout::shipping::calculate_fee;
/// use storefront_checkout::simple_types::Amount;
/// use rust_decimal::Decimal;
///
/// let amount = |value: i64| Amount::create(Decimal::from(value)).unwrap();
///
/// assert_eq!(calculate_fee(Some("MOHAMMÉDIA"), amount(0)), amount(25));
/// assert_eq!(calculate_fee(Some("Casablanca"), amount(400)), Amount::ZERO);
/// assert_eq!(calculate_fee(Some("Fès"), amount(599)), amount(45));
/// assert_eq!(calculate_fee(None, amount(0)), Amount::ZERO);
/// ```
#[must_use]
pub fn calculate_fee(city: Option<&str>, subtotal: Amount) -> Amount {
    default_rate_table().calculate_fee(city, subtotal)
}
