//! Shipping fee calculation
//!
//! A delivery city resolves to one of two zones; each zone has a flat cost
//! that is waived once the order subtotal reaches the zone's free threshold.
//!
//! # Items
//!
//! - [`ShippingZone`] - Zone1 (listed cities) or Zone2 (everything else)
//! - [`ShippingRate`] - flat cost plus free threshold
//! - [`RateTable`] - immutable zone to rate mapping
//! - [`ShippingQuote`] - fee with zone and distance to free delivery
//! - [`calculate_fee`] - fee against the default table
//!
//! # Examples
//!
//! ```
//! use storefront_checkout::shipping::{RateTable, ShippingZone, calculate_fee};
//! use storefront_checkout::simple_types::Amount;
//! use rust_decimal::Decimal;
//!
//! let subtotal = Amount::create(Decimal::from(350)).unwrap();
//!
//! assert_eq!(calculate_fee(Some("Casablanca"), subtotal).value(), Decimal::from(25));
//!
//! let quote = RateTable::default().quote(Some("Casablanca"), subtotal);
//! assert_eq!(quote.zone(), Some(ShippingZone::Zone1));
//! assert_eq!(
//!     quote.remaining_for_free_shipping().map(|remaining| remaining.value()),
//!     Some(Decimal::from(50))
//! );
//! ```

mod fee;
mod quote;
mod rate;
mod rate_table;
mod zone;

pub use fee::calculate_fee;
pub use quote::ShippingQuote;
pub use rate::ShippingRate;
pub use rate_table::{
    DEFAULT_ZONE1_CITIES, DEFAULT_ZONE1_FLAT_COST, DEFAULT_ZONE1_FREE_THRESHOLD,
    DEFAULT_ZONE2_FLAT_COST, DEFAULT_ZONE2_FREE_THRESHOLD, RateTable, default_rate_table,
};
pub use zone::{ShippingZone, normalize_city};
