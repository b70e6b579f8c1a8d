//! Cart quantity type

use super::constrained_type;
use super::error::ValidationError;

/// Number of units of one product in a cart line
///
/// Constrained to `1..=100`.
///
/// # Examples
///
/// ```
/// use storefront_checkout::simple_types::Quantity;
///
/// assert_eq!(Quantity::create(3).unwrap().value(), 3);
/// assert!(Quantity::create(0).is_err());
/// assert!(Quantity::create(101).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quantity(u32);

impl Quantity {
    const FIELD_NAME: &'static str = "Quantity";
    const MIN_VALUE: u32 = 1;
    const MAX_VALUE: u32 = 100;

    /// Creates a `Quantity`
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value is outside `1..=100`.
    pub fn create(value: u32) -> Result<Self, ValidationError> {
        constrained_type::create_integer(
            Self::FIELD_NAME,
            Quantity,
            Self::MIN_VALUE,
            Self::MAX_VALUE,
            value,
        )
    }

    /// Returns the inner value
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}
