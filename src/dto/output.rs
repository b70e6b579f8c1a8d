//! Response DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::checkout::OrderSummary;
use crate::registration::ValidatedRegistration;
use crate::shipping::ShippingQuote;

// =============================================================================
// ShippingQuoteDto
// =============================================================================

/// Response of `POST /shipping/quote`
///
/// # Examples
///
/// ```
/// use storefront_checkout::dto::ShippingQuoteDto;
/// use storefront_checkout::shipping::RateTable;
/// use storefront_checkout::simple_types::Amount;
/// use rust_decimal::Decimal;
///
/// let subtotal = Amount::create(Decimal::from(100)).unwrap();
/// let quote = RateTable::default().quote(Some("Rabat"), subtotal);
///
/// let dto = ShippingQuoteDto::from_domain(&quote);
/// let json = serde_json::to_string(&dto).unwrap();
/// assert!(json.contains(r#""zone":"zone2""#));
/// assert!(json.contains(r#""fee":"45""#));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingQuoteDto {
    /// `"zone1"`, `"zone2"` or `null` when no city is selected
    pub zone: Option<String>,
    /// Delivery fee
    pub fee: Decimal,
    /// `true` once the free threshold of the selected zone is met
    pub free_shipping: bool,
    /// Amount left to reach free delivery, `null` when no city is selected
    pub remaining_for_free_shipping: Option<Decimal>,
}

impl ShippingQuoteDto {
    /// Creates the DTO from a domain quote
    #[must_use]
    pub fn from_domain(quote: &ShippingQuote) -> Self {
        Self {
            zone: quote.zone().map(|zone| zone.as_str().to_string()),
            fee: quote.fee().value(),
            free_shipping: quote.is_free_shipping(),
            remaining_for_free_shipping: quote
                .remaining_for_free_shipping()
                .map(|remaining| remaining.value()),
        }
    }
}

// =============================================================================
// OrderSummaryDto
// =============================================================================

/// Response of `POST /checkout/summary`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummaryDto {
    /// Sum of cart lines
    pub subtotal: Decimal,
    /// Delivery fee and zone details
    pub shipping: ShippingQuoteDto,
    /// Subtotal plus delivery fee
    pub total: Decimal,
}

impl OrderSummaryDto {
    /// Creates the DTO from a domain summary
    #[must_use]
    pub fn from_domain(summary: &OrderSummary) -> Self {
        Self {
            subtotal: summary.subtotal().value(),
            shipping: ShippingQuoteDto::from_domain(summary.shipping()),
            total: summary.total().value(),
        }
    }
}

// =============================================================================
// RegistrationAcceptedDto
// =============================================================================

/// Response of `POST /registrations/validate` when every rule passes
///
/// Echoes the normalized values; the password is never returned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationAcceptedDto {
    /// Trimmed full name
    pub full_name: String,
    /// Normalized email
    pub email: String,
    /// Phone, `null` if omitted
    pub phone: Option<String>,
    /// City, `null` if omitted
    pub city: Option<String>,
}

impl RegistrationAcceptedDto {
    /// Creates the DTO from a validated registration
    #[must_use]
    pub fn from_domain(registration: &ValidatedRegistration) -> Self {
        Self {
            full_name: registration.full_name().value().to_string(),
            email: registration.email().value().to_string(),
            phone: registration
                .phone()
                .map(|phone| phone.value().to_string()),
            city: registration.city().map(|city| city.value().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::{Cart, CartLine, summarize_order};
    use crate::shipping::RateTable;
    use crate::simple_types::{Amount, Price, Quantity, String50};
    use rstest::rstest;

    #[rstest]
    fn test_quote_dto_unselected_city() {
        let quote = RateTable::default().quote(None, Amount::ZERO);

        let dto = ShippingQuoteDto::from_domain(&quote);

        assert_eq!(dto.zone, None);
        assert_eq!(dto.fee, Decimal::ZERO);
        assert!(!dto.free_shipping);
        assert_eq!(dto.remaining_for_free_shipping, None);
    }

    #[rstest]
    fn test_quote_dto_serializes_decimals_as_strings() {
        let subtotal = Amount::create(Decimal::new(39_950, 2)).unwrap();
        let quote = RateTable::default().quote(Some("Casablanca"), subtotal);

        let json = serde_json::to_value(ShippingQuoteDto::from_domain(&quote)).unwrap();

        assert_eq!(json["zone"], "zone1");
        assert_eq!(json["fee"], "25");
        assert_eq!(json["free_shipping"], false);
        assert_eq!(json["remaining_for_free_shipping"], "0.50");
    }

    #[rstest]
    fn test_order_summary_dto() {
        let cart = Cart::new(vec![CartLine::new(
            String50::create("ProductName", "Lantern").unwrap(),
            Price::create(Decimal::from(250)).unwrap(),
            Quantity::create(1).unwrap(),
        )]);
        let summary = summarize_order(&RateTable::default(), Some("Casablanca"), &cart).unwrap();

        let dto = OrderSummaryDto::from_domain(&summary);

        assert_eq!(dto.subtotal, Decimal::from(250));
        assert_eq!(dto.shipping.fee, Decimal::from(25));
        assert_eq!(dto.total, Decimal::from(275));
    }
}
