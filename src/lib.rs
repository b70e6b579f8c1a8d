//! # storefront-checkout
//!
//! Checkout-side business rules for an online storefront.
//!
//! ## Overview
//!
//! - **Shipping**: two-zone delivery fee calculation with free-shipping
//!   thresholds ([`shipping::calculate_fee`])
//! - **Checkout**: cart subtotal plus shipping fee ([`checkout::summarize_order`])
//! - **Registration**: customer sign-up form validation that reports every
//!   failing field at once ([`registration::validate_registration`])
//! - **HTTP API**: axum routes over the above ([`api::create_router`])
//!
//! ## Example
//!
//! ```rust
//! use storefront_checkout::shipping::calculate_fee;
//! use storefront_checkout::simple_types::Amount;
//! use rust_decimal::Decimal;
//!
//! let amount = |value: i64| Amount::create(Decimal::from(value)).unwrap();
//!
//! assert_eq!(calculate_fee(Some("Mohammédia"), amount(399)), amount(25));
//! assert_eq!(calculate_fee(Some("Mohammédia"), amount(400)), Amount::ZERO);
//! assert_eq!(calculate_fee(Some("Tangier"), amount(599)), amount(45));
//! assert_eq!(calculate_fee(None, amount(10)), Amount::ZERO);
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod checkout;
pub mod config;
pub mod dto;
pub mod registration;
pub mod shipping;
pub mod simple_types;
