//! Validation error shared by every constrained type

use thiserror::Error;

/// A single failed constraint
///
/// Holds the name of the offending field and a human readable message.
///
/// # Examples
///
/// ```
/// use storefront_checkout::simple_types::ValidationError;
///
/// let error = ValidationError::new("Subtotal", "Must not be less than 0");
/// assert_eq!(error.field_name, "Subtotal");
/// assert_eq!(error.to_string(), "Subtotal: Must not be less than 0");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field_name}: {message}")]
pub struct ValidationError {
    /// Name of the field where the error occurred
    pub field_name: String,
    /// Error message
    pub message: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`
    #[must_use]
    pub fn new(field_name: &str, message: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            message: message.to_string(),
        }
    }
}
