//! Zone to rate mapping
//!
//! A [`RateTable`] is built once (either [`RateTable::default`] or from
//! configuration) and only read afterwards. Every city resolves to exactly one
//! zone: Zone1 when it is listed, Zone2 otherwise.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use super::quote::ShippingQuote;
use super::rate::ShippingRate;
use super::zone::{ShippingZone, normalize_city};
use crate::simple_types::Amount;

/// Cities delivered at the Zone1 rate by default
pub const DEFAULT_ZONE1_CITIES: [&str; 2] = ["Casablanca", "Mohammédia"];

/// Default Zone1 flat cost
pub const DEFAULT_ZONE1_FLAT_COST: i64 = 25;

/// Default Zone1 free-shipping threshold
pub const DEFAULT_ZONE1_FREE_THRESHOLD: i64 = 400;

/// Default Zone2 flat cost
pub const DEFAULT_ZONE2_FLAT_COST: i64 = 45;

/// Default Zone2 free-shipping threshold
pub const DEFAULT_ZONE2_FREE_THRESHOLD: i64 = 600;

static DEFAULT_RATE_TABLE: LazyLock<RateTable> = LazyLock::new(RateTable::default);

/// Returns the process-wide default rate table
///
/// Initialized on first use and never mutated.
#[must_use]
pub fn default_rate_table() -> &'static RateTable {
    &DEFAULT_RATE_TABLE
}

/// Immutable two-zone shipping rate table
///
/// # Examples
///
/// ```
/// use storefront_checkout::shipping::{RateTable, ShippingZone};
/// use storefront_checkout::simple_types::Amount;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::default();
/// let subtotal = Amount::create(Decimal::from(399)).unwrap();
///
/// assert_eq!(table.classify("casablanca "), ShippingZone::Zone1);
/// assert_eq!(table.classify("Rabat"), ShippingZone::Zone2);
/// assert_eq!(
///     table.calculate_fee(Some("Casablanca"), subtotal).value(),
///     Decimal::from(25)
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateTable {
    zone1_cities: BTreeSet<String>,
    zone1_rate: ShippingRate,
    zone2_rate: ShippingRate,
}

impl RateTable {
    /// Creates a rate table
    ///
    /// City names are normalized with [`normalize_city`]; blank entries are
    /// dropped and duplicates collapse.
    #[must_use]
    pub fn new<I, S>(zone1_cities: I, zone1_rate: ShippingRate, zone2_rate: ShippingRate) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let zone1_cities = zone1_cities
            .into_iter()
            .map(|city| normalize_city(city.as_ref()))
            .filter(|city| !city.is_empty())
            .collect();

        Self {
            zone1_cities,
            zone1_rate,
            zone2_rate,
        }
    }

    /// Normalized Zone1 city names, in sorted order
    pub fn zone1_cities(&self) -> impl Iterator<Item = &str> {
        self.zone1_cities.iter().map(String::as_str)
    }

    /// Resolves a city to its zone
    ///
    /// Total: any string, including a blank one, lands in exactly one zone.
    #[must_use]
    pub fn classify(&self, city: &str) -> ShippingZone {
        if self.zone1_cities.contains(&normalize_city(city)) {
            ShippingZone::Zone1
        } else {
            ShippingZone::Zone2
        }
    }

    /// Rate applied to `zone`
    #[must_use]
    pub const fn rate_for(&self, zone: ShippingZone) -> &ShippingRate {
        match zone {
            ShippingZone::Zone1 => &self.zone1_rate,
            ShippingZone::Zone2 => &self.zone2_rate,
        }
    }

    /// Delivery fee for a city and an order subtotal
    ///
    /// An absent or empty city means no destination has been chosen yet and
    /// costs nothing. Otherwise the city's zone rate applies: free once the
    /// subtotal reaches the zone threshold, the flat cost below it.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_checkout::shipping::RateTable;
    /// use storefront_checkout::simple_types::Amount;
    /// use rust_decimal::Decimal;
    ///
    /// let table = RateTable::default();
    /// let amount = |value: i64| Amount::create(Decimal::from(value)).unwrap();
    ///
    /// assert_eq!(table.calculate_fee(Some("Rabat"), amount(0)), amount(45));
    /// assert_eq!(table.calculate_fee(Some("Rabat"), amount(600)), Amount::ZERO);
    /// assert_eq!(table.calculate_fee(Some(""), amount(10)), Amount::ZERO);
    /// assert_eq!(table.calculate_fee(None, amount(10)), Amount::ZERO);
    /// ```
    #[must_use]
    pub fn calculate_fee(&self, city: Option<&str>, subtotal: Amount) -> Amount {
        selected_city(city).map_or(Amount::ZERO, |city| {
            self.rate_for(self.classify(city)).fee_for(subtotal)
        })
    }

    /// Fee plus the zone and the distance to free delivery
    ///
    /// `fee` always equals [`RateTable::calculate_fee`] for the same inputs.
    #[must_use]
    pub fn quote(&self, city: Option<&str>, subtotal: Amount) -> ShippingQuote {
        selected_city(city).map_or_else(ShippingQuote::unselected, |city| {
            let zone = self.classify(city);
            let rate = self.rate_for(zone);
            ShippingQuote::for_zone(
                zone,
                rate.fee_for(subtotal),
                rate.remaining_for_free_shipping(subtotal),
            )
        })
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_ZONE1_CITIES,
            ShippingRate::new(
                whole_amount(DEFAULT_ZONE1_FLAT_COST),
                whole_amount(DEFAULT_ZONE1_FREE_THRESHOLD),
            ),
            ShippingRate::new(
                whole_amount(DEFAULT_ZONE2_FLAT_COST),
                whole_amount(DEFAULT_ZONE2_FREE_THRESHOLD),
            ),
        )
    }
}

/// `None` and `""` both mean no delivery city has been picked yet
fn selected_city(city: Option<&str>) -> Option<&str> {
    city.filter(|city| !city.is_empty())
}

/// Builds an `Amount` from one of the default constants
fn whole_amount(value: i64) -> Amount {
    Amount::create(Decimal::from(value))
        .unwrap_or_else(|error| panic!("Default shipping constant out of range: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn amount(value: i64) -> Amount {
        Amount::create(Decimal::from(value)).unwrap()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[rstest]
    fn test_new_normalizes_and_deduplicates() {
        let rate = ShippingRate::new(amount(10), amount(100));
        let table = RateTable::new(["  Tanger", "TANGER", "", "  ", "Tétouan"], rate, rate);

        let cities: Vec<&str> = table.zone1_cities().collect();

        assert_eq!(cities, vec!["tanger", "tétouan"]);
    }

    #[rstest]
    fn test_default_table() {
        let table = RateTable::default();

        let cities: Vec<&str> = table.zone1_cities().collect();
        assert_eq!(cities, vec!["casablanca", "mohammédia"]);
        assert_eq!(
            table.rate_for(ShippingZone::Zone1),
            &ShippingRate::new(amount(25), amount(400))
        );
        assert_eq!(
            table.rate_for(ShippingZone::Zone2),
            &ShippingRate::new(amount(45), amount(600))
        );
    }

    #[rstest]
    fn test_default_rate_table_is_shared() {
        assert!(std::ptr::eq(default_rate_table(), default_rate_table()));
        assert_eq!(default_rate_table(), &RateTable::default());
    }

    // =========================================================================
    // classify
    // =========================================================================

    #[rstest]
    #[case("Casablanca", ShippingZone::Zone1)]
    #[case("casablanca ", ShippingZone::Zone1)]
    #[case("MOHAMMÉDIA", ShippingZone::Zone1)]
    #[case("Rabat", ShippingZone::Zone2)]
    #[case("Mohammedia", ShippingZone::Zone2)]
    #[case("Casa", ShippingZone::Zone2)]
    #[case("   ", ShippingZone::Zone2)]
    #[case("", ShippingZone::Zone2)]
    fn test_classify(#[case] city: &str, #[case] expected: ShippingZone) {
        assert_eq!(RateTable::default().classify(city), expected);
    }

    // =========================================================================
    // calculate_fee
    // =========================================================================

    #[rstest]
    #[case(Some("Casablanca"), 0, 25)]
    #[case(Some("casablanca "), 0, 25)]
    #[case(Some("MOHAMMÉDIA"), 0, 25)]
    #[case(Some("Casablanca"), 399, 25)]
    #[case(Some("Casablanca"), 400, 0)]
    #[case(Some("Rabat"), 0, 45)]
    #[case(Some("Rabat"), 400, 45)]
    #[case(Some("Rabat"), 600, 0)]
    #[case(Some(""), 0, 0)]
    #[case(Some(""), 5_000, 0)]
    #[case(None, 0, 0)]
    #[case(None, 5_000, 0)]
    fn test_calculate_fee(
        #[case] city: Option<&str>,
        #[case] subtotal: i64,
        #[case] expected: i64,
    ) {
        let table = RateTable::default();

        assert_eq!(table.calculate_fee(city, amount(subtotal)), amount(expected));
    }

    #[rstest]
    fn test_calculate_fee_whitespace_only_city_is_zone2() {
        let table = RateTable::default();

        assert_eq!(table.calculate_fee(Some("  "), amount(0)), amount(45));
    }

    #[rstest]
    fn test_calculate_fee_with_custom_table() {
        let table = RateTable::new(
            ["Marrakech"],
            ShippingRate::new(amount(15), amount(200)),
            ShippingRate::new(amount(60), amount(1_000)),
        );

        assert_eq!(table.calculate_fee(Some("marrakech"), amount(199)), amount(15));
        assert_eq!(table.calculate_fee(Some("Casablanca"), amount(999)), amount(60));
        assert_eq!(table.calculate_fee(Some("Casablanca"), amount(1_000)), Amount::ZERO);
    }

    // =========================================================================
    // quote
    // =========================================================================

    #[rstest]
    fn test_quote_unselected_city() {
        let quote = RateTable::default().quote(None, amount(100));

        assert_eq!(quote.zone(), None);
        assert_eq!(quote.fee(), Amount::ZERO);
        assert_eq!(quote.remaining_for_free_shipping(), None);
        assert!(!quote.is_free_shipping());
    }

    #[rstest]
    fn test_quote_below_threshold() {
        let quote = RateTable::default().quote(Some("Casablanca"), amount(250));

        assert_eq!(quote.zone(), Some(ShippingZone::Zone1));
        assert_eq!(quote.fee(), amount(25));
        assert_eq!(quote.remaining_for_free_shipping(), Some(amount(150)));
        assert!(!quote.is_free_shipping());
    }

    #[rstest]
    fn test_quote_free_shipping_reached() {
        let quote = RateTable::default().quote(Some("Agadir"), amount(600));

        assert_eq!(quote.zone(), Some(ShippingZone::Zone2));
        assert_eq!(quote.fee(), Amount::ZERO);
        assert_eq!(quote.remaining_for_free_shipping(), Some(Amount::ZERO));
        assert!(quote.is_free_shipping());
    }
}
