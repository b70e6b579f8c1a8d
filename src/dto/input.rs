//! Request DTOs
//!
//! Deserialized request bodies and their conversion into domain values.
//! Decimals are sent as JSON strings (`"399.00"`).
//!
//! # Types
//!
//! - [`ShippingQuoteRequestDto`] - city + subtotal
//! - [`CartLineDto`] / [`CheckoutRequestDto`] - cart submitted at checkout
//! - [`RegistrationDto`] - sign-up form

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::checkout::{Cart, CartLine};
use crate::registration::UnvalidatedRegistration;
use crate::simple_types::{Amount, Price, Quantity, String50, ValidationError};

// =============================================================================
// ShippingQuoteRequestDto
// =============================================================================

/// Body of `POST /shipping/quote`
///
/// # Examples
///
/// ```
/// use storefront_checkout::dto::ShippingQuoteRequestDto;
///
/// let dto: ShippingQuoteRequestDto =
///     serde_json::from_str(r#"{"city": "Casablanca", "subtotal": "399.00"}"#).unwrap();
/// assert_eq!(dto.city.as_deref(), Some("Casablanca"));
///
/// let unselected: ShippingQuoteRequestDto =
///     serde_json::from_str(r#"{"subtotal": "10"}"#).unwrap();
/// assert_eq!(unselected.city, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingQuoteRequestDto {
    /// Delivery city; `null`, missing or `""` means none selected yet
    #[serde(default)]
    pub city: Option<String>,
    /// Order subtotal
    pub subtotal: Decimal,
}

impl ShippingQuoteRequestDto {
    /// Validates the subtotal
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` (field `Subtotal`) for a negative or
    /// out-of-range subtotal.
    pub fn to_subtotal(&self) -> Result<Amount, ValidationError> {
        Amount::create_field("Subtotal", self.subtotal)
    }
}

// =============================================================================
// CartLineDto / CheckoutRequestDto
// =============================================================================

/// One cart line as submitted
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineDto {
    /// Product display name
    pub product_name: String,
    /// Unit price
    pub unit_price: Decimal,
    /// Number of units
    pub quantity: u32,
}

impl CartLineDto {
    /// Converts into a validated [`CartLine`]
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` among name, price and quantity.
    pub fn to_cart_line(&self) -> Result<CartLine, ValidationError> {
        let product_name = String50::create("ProductName", self.product_name.trim())?;
        let unit_price = Price::create_field("UnitPrice", self.unit_price)?;
        let quantity = Quantity::create(self.quantity)?;

        Ok(CartLine::new(product_name, unit_price, quantity))
    }
}

/// Body of `POST /checkout/summary`
///
/// # Examples
///
/// ```
/// use storefront_checkout::dto::CheckoutRequestDto;
///
/// let json = r#"{
///     "city": "Rabat",
///     "lines": [
///         {"product_name": "Argan oil", "unit_price": "120.00", "quantity": 2}
///     ]
/// }"#;
///
/// let dto: CheckoutRequestDto = serde_json::from_str(json).unwrap();
/// let cart = dto.to_cart().unwrap();
/// assert_eq!(cart.item_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequestDto {
    /// Delivery city; `null`, missing or `""` means none selected yet
    #[serde(default)]
    pub city: Option<String>,
    /// Cart lines
    #[serde(default)]
    pub lines: Vec<CartLineDto>,
}

impl CheckoutRequestDto {
    /// Converts the submitted lines into a [`Cart`]
    ///
    /// # Errors
    ///
    /// Returns every line's `ValidationError`, in line order.
    pub fn to_cart(&self) -> Result<Cart, Vec<ValidationError>> {
        let (lines, errors): (Vec<_>, Vec<_>) = self
            .lines
            .iter()
            .map(CartLineDto::to_cart_line)
            .partition(Result::is_ok);

        if errors.is_empty() {
            Ok(Cart::new(lines.into_iter().flatten().collect()))
        } else {
            Err(errors.into_iter().filter_map(Result::err).collect())
        }
    }
}

// =============================================================================
// RegistrationDto
// =============================================================================

/// Body of `POST /registrations/validate`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDto {
    /// Full name
    pub full_name: String,
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
    /// Password repeated
    pub password_confirmation: String,
    /// Phone number, optional
    #[serde(default)]
    pub phone: String,
    /// Default delivery city, optional
    #[serde(default)]
    pub city: String,
}

impl RegistrationDto {
    /// Converts into the raw domain form without validating
    #[must_use]
    pub fn to_unvalidated_registration(&self) -> UnvalidatedRegistration {
        UnvalidatedRegistration::new(
            self.full_name.clone(),
            self.email.clone(),
            self.password.clone(),
            self.password_confirmation.clone(),
            self.phone.clone(),
            self.city.clone(),
        )
    }
}

impl std::fmt::Debug for RegistrationDto {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("RegistrationDto")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("city", &self.city)
            .finish_non_exhaustive()
    }
}
