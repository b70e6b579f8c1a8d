//! Money types
//!
//! `Price` is the unit price of a catalog product, `Amount` is any computed
//! sum of money (line totals, subtotals, shipping fees, order totals).

use std::fmt;

use rust_decimal::Decimal;

use super::constrained_type;
use super::error::ValidationError;
use super::quantity_types::Quantity;

// =============================================================================
// Price
// =============================================================================

/// Unit price of a product
///
/// Constrained to `0.00..=100000.00`.
///
/// # Examples
///
/// ```
/// use storefront_checkout::simple_types::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::create(Decimal::new(19_950, 2)).unwrap();
/// assert_eq!(price.value(), Decimal::new(19_950, 2));
///
/// assert!(Price::create(Decimal::from(-1)).is_err());
/// assert!(Price::create(Decimal::from(100_001)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Price(Decimal);

impl Price {
    const FIELD_NAME: &'static str = "Price";

    fn max_value() -> Decimal {
        Decimal::from(100_000)
    }

    /// Creates a `Price` from a decimal
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value is negative or above 100000.00.
    pub fn create(value: Decimal) -> Result<Self, ValidationError> {
        Self::create_field(Self::FIELD_NAME, value)
    }

    /// Creates a `Price`, reporting failures under `field_name`
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value is negative or above 100000.00.
    pub fn create_field(field_name: &str, value: Decimal) -> Result<Self, ValidationError> {
        constrained_type::create_decimal(field_name, Price, Decimal::ZERO, Self::max_value(), value)
    }

    /// Multiplies the unit price by a quantity, producing a line total
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the product leaves the `Amount` range.
    pub fn multiply(&self, quantity: Quantity) -> Result<Amount, ValidationError> {
        Amount::create(self.0 * Decimal::from(quantity.value()))
    }

    /// Returns the inner decimal
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

// =============================================================================
// Amount
// =============================================================================

/// Non-negative sum of money
///
/// Constrained to `0.00..=10000000.00`. Subtotals handed to the shipping
/// calculator are `Amount`s, so a negative subtotal is unrepresentable.
///
/// # Examples
///
/// ```
/// use storefront_checkout::simple_types::Amount;
/// use rust_decimal::Decimal;
///
/// let subtotal = Amount::create(Decimal::from(399)).unwrap();
/// let fee = Amount::create(Decimal::from(25)).unwrap();
///
/// let total = subtotal.checked_add(fee).unwrap();
/// assert_eq!(total.value(), Decimal::from(424));
///
/// assert!(Amount::create(Decimal::from(-5)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    const FIELD_NAME: &'static str = "Amount";

    /// The zero amount
    pub const ZERO: Self = Self(Decimal::ZERO);

    fn max_value() -> Decimal {
        Decimal::from(10_000_000)
    }

    /// Creates an `Amount` from a decimal
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value is negative or above 10000000.00.
    pub fn create(value: Decimal) -> Result<Self, ValidationError> {
        Self::create_field(Self::FIELD_NAME, value)
    }

    /// Creates an `Amount`, reporting failures under `field_name`
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value is negative or above 10000000.00.
    pub fn create_field(field_name: &str, value: Decimal) -> Result<Self, ValidationError> {
        constrained_type::create_decimal(
            field_name,
            Amount,
            Decimal::ZERO,
            Self::max_value(),
            value,
        )
    }

    /// Adds two amounts
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the sum exceeds 10000000.00.
    pub fn checked_add(self, other: Self) -> Result<Self, ValidationError> {
        Self::create(self.0 + other.0)
    }

    /// Sums a sequence of amounts
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the total exceeds 10000000.00.
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront_checkout::simple_types::Amount;
    /// use rust_decimal::Decimal;
    ///
    /// let amounts = [
    ///     Amount::create(Decimal::from(150)).unwrap(),
    ///     Amount::create(Decimal::from(250)).unwrap(),
    /// ];
    /// assert_eq!(Amount::sum(amounts).unwrap().value(), Decimal::from(400));
    /// assert_eq!(Amount::sum([]).unwrap(), Amount::ZERO);
    /// ```
    pub fn sum<I>(amounts: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |accumulator, amount| accumulator.checked_add(amount))
    }

    /// Subtracts `other`, flooring the result at zero
    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        if other.0 >= self.0 {
            Self::ZERO
        } else {
            Self(self.0 - other.0)
        }
    }

    /// Returns `true` if the amount is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the inner decimal
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
