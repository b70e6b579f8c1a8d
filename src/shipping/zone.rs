//! Shipping zones and city normalization

use std::fmt;

/// Geographic grouping of delivery destinations sharing one rate
///
/// - [`Zone1`](ShippingZone::Zone1) - the explicitly listed cities
/// - [`Zone2`](ShippingZone::Zone2) - every other city
///
/// # Examples
///
/// ```
/// use storefront_checkout::shipping::ShippingZone;
///
/// let zone = ShippingZone::Zone1;
/// assert!(zone.is_zone1());
/// assert!(!zone.is_zone2());
/// assert_eq!(zone.to_string(), "zone1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShippingZone {
    /// Cities named in the rate table's Zone1 set
    Zone1,

    /// Complement of Zone1
    Zone2,
}

impl ShippingZone {
    /// Returns `true` for `Zone1`
    #[must_use]
    pub const fn is_zone1(&self) -> bool {
        matches!(self, Self::Zone1)
    }

    /// Returns `true` for `Zone2`
    #[must_use]
    pub const fn is_zone2(&self) -> bool {
        matches!(self, Self::Zone2)
    }

    /// Stable lowercase identifier, used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Zone1 => "zone1",
            Self::Zone2 => "zone2",
        }
    }
}

impl fmt::Display for ShippingZone {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Normalizes a city name for zone matching
///
/// Trims surrounding whitespace and lower-cases with Unicode case mapping, so
/// `" MOHAMMÉDIA"` and `"mohammédia"` compare equal.
///
/// # Examples
///
/// ```
/// use storefront_checkout::shipping::normalize_city;
///
/// assert_eq!(normalize_city("  Casablanca "), "casablanca");
/// assert_eq!(normalize_city("MOHAMMÉDIA"), "mohammédia");
/// ```
#[must_use]
pub fn normalize_city(raw: &str) -> String {
    raw.trim().to_lowercase()
}
