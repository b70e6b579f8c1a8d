//! Error DTOs

use serde::{Deserialize, Serialize};

use crate::simple_types::ValidationError;

/// One failed field constraint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorDto {
    /// Field name
    pub field_name: String,
    /// Error message
    pub message: String,
}

impl FieldErrorDto {
    /// Creates the DTO from a domain `ValidationError`
    #[must_use]
    pub fn from_domain(error: &ValidationError) -> Self {
        Self {
            field_name: error.field_name.clone(),
            message: error.message.clone(),
        }
    }
}

/// Body of every non-2xx response
///
/// # Examples
///
/// ```
/// use storefront_checkout::dto::ErrorResponseDto;
///
/// let dto = ErrorResponseDto::new("EMPTY_CART", "Cart is empty");
/// let json = serde_json::to_string(&dto).unwrap();
/// assert_eq!(json, r#"{"code":"EMPTY_CART","message":"Cart is empty"}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    /// Machine readable error code
    pub code: String,
    /// Human readable message
    pub message: String,
    /// Field errors, omitted when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldErrorDto>,
}

impl ErrorResponseDto {
    /// Creates an error body without field errors
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Attaches field errors
    #[must_use]
    pub fn with_errors(mut self, errors: &[ValidationError]) -> Self {
        self.errors = errors.iter().map(FieldErrorDto::from_domain).collect();
        self
    }
}
