//! Checkout error types

use thiserror::Error;

use crate::simple_types::ValidationError;

/// Reasons an order summary cannot be produced
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The cart has no lines
    #[error("Cart is empty")]
    EmptyCart,

    /// An amount left its allowed range
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CheckoutError {
    /// Returns `true` for `EmptyCart`
    #[must_use]
    pub const fn is_empty_cart(&self) -> bool {
        matches!(self, Self::EmptyCart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display() {
        assert_eq!(CheckoutError::EmptyCart.to_string(), "Cart is empty");

        let error = CheckoutError::from(ValidationError::new("Amount", "Must not be less than 0"));
        assert_eq!(error.to_string(), "Amount: Must not be less than 0");
        assert!(!error.is_empty_cart());
    }
}
