//! Data transfer objects for the HTTP API
//!
//! Serde shapes kept apart from the domain types; conversions go through
//! `to_*` (input) and `from_domain` (output) functions.

mod error;
mod input;
mod output;

pub use error::{ErrorResponseDto, FieldErrorDto};
pub use input::{CartLineDto, CheckoutRequestDto, RegistrationDto, ShippingQuoteRequestDto};
pub use output::{OrderSummaryDto, RegistrationAcceptedDto, ShippingQuoteDto};
