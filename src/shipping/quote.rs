//! Shipping quote returned to checkout pages

use super::zone::ShippingZone;
use crate::simple_types::Amount;

/// Result of quoting delivery for a city and subtotal
///
/// The `fee` alone cannot tell "no city chosen" apart from "free delivery
/// reached"; `zone` can.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShippingQuote {
    zone: Option<ShippingZone>,
    fee: Amount,
    remaining_for_free_shipping: Option<Amount>,
}

impl ShippingQuote {
    /// Quote for a checkout where no delivery city is selected yet
    #[must_use]
    pub const fn unselected() -> Self {
        Self {
            zone: None,
            fee: Amount::ZERO,
            remaining_for_free_shipping: None,
        }
    }

    /// Quote for a resolved zone
    #[must_use]
    pub const fn for_zone(
        zone: ShippingZone,
        fee: Amount,
        remaining_for_free_shipping: Amount,
    ) -> Self {
        Self {
            zone: Some(zone),
            fee,
            remaining_for_free_shipping: Some(remaining_for_free_shipping),
        }
    }

    /// Zone of the selected city, `None` if no city is selected
    #[must_use]
    pub const fn zone(&self) -> Option<ShippingZone> {
        self.zone
    }

    /// Delivery fee
    #[must_use]
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Amount still needed to reach free delivery, `None` if no city is selected
    #[must_use]
    pub const fn remaining_for_free_shipping(&self) -> Option<Amount> {
        self.remaining_for_free_shipping
    }

    /// Returns `true` if a city is selected and its free threshold is met
    #[must_use]
    pub fn is_free_shipping(&self) -> bool {
        self.remaining_for_free_shipping
            .is_some_and(|remaining| remaining.is_zero())
    }
}
