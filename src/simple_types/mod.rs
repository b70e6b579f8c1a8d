//! Constrained primitive types
//!
//! Every type here is a newtype with a smart constructor: `create` validates
//! the raw value and returns `Result<T, ValidationError>`, so once a value
//! exists it is known to satisfy its constraint.
//!
//! # Type categories
//!
//! - **Strings**: `String50`, `EmailAddress`, `CityName`, `Password`, `PhoneNumber`
//! - **Quantities**: `Quantity`
//! - **Money**: `Price`, `Amount`
//!
//! # Examples
//!
//! ```
//! use storefront_checkout::simple_types::{Amount, Price, Quantity};
//! use rust_decimal::Decimal;
//!
//! let price = Price::create(Decimal::from(120)).unwrap();
//! let quantity = Quantity::create(3).unwrap();
//!
//! let line_total: Amount = price.multiply(quantity).unwrap();
//! assert_eq!(line_total.value(), Decimal::from(360));
//! ```

pub mod constrained_type;
mod error;
mod price_types;
mod quantity_types;
mod string_types;

pub use error::ValidationError;

pub use string_types::{CityName, EmailAddress, Password, PhoneNumber, String50};

pub use quantity_types::Quantity;

pub use price_types::{Amount, Price};
