//! Per-zone shipping rate

use crate::simple_types::Amount;

/// Flat delivery cost and the subtotal above which it is waived
///
/// # Examples
///
/// ```
/// use storefront_checkout::shipping::ShippingRate;
/// use storefront_checkout::simple_types::Amount;
/// use rust_decimal::Decimal;
///
/// let amount = |value: i64| Amount::create(Decimal::from(value)).unwrap();
/// let rate = ShippingRate::new(amount(25), amount(400));
///
/// assert_eq!(rate.fee_for(amount(399)), amount(25));
/// assert_eq!(rate.fee_for(amount(400)), Amount::ZERO);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShippingRate {
    flat_cost: Amount,
    free_threshold: Amount,
}

impl ShippingRate {
    /// Creates a rate
    #[must_use]
    pub const fn new(flat_cost: Amount, free_threshold: Amount) -> Self {
        Self {
            flat_cost,
            free_threshold,
        }
    }

    /// Fee charged when the free threshold is not met
    #[must_use]
    pub const fn flat_cost(&self) -> Amount {
        self.flat_cost
    }

    /// Subtotal at or above which delivery is free
    #[must_use]
    pub const fn free_threshold(&self) -> Amount {
        self.free_threshold
    }

    /// Returns `true` if `subtotal` reaches the free threshold
    #[must_use]
    pub fn qualifies_for_free_shipping(&self, subtotal: Amount) -> bool {
        subtotal >= self.free_threshold
    }

    /// Delivery fee for `subtotal`: zero once the threshold is met, the flat
    /// cost otherwise
    #[must_use]
    pub fn fee_for(&self, subtotal: Amount) -> Amount {
        if self.qualifies_for_free_shipping(subtotal) {
            Amount::ZERO
        } else {
            self.flat_cost
        }
    }

    /// How much more the customer has to spend to reach free delivery
    #[must_use]
    pub fn remaining_for_free_shipping(&self, subtotal: Amount) -> Amount {
        self.free_threshold.saturating_sub(subtotal)
    }
}
