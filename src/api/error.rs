//! API error type and its HTTP mapping

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::checkout::CheckoutError;
use crate::dto::ErrorResponseDto;
use crate::simple_types::ValidationError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Malformed request body: {message}")]
    MalformedBody { message: String },

    #[error("Request failed validation")]
    Validation { errors: Vec<ValidationError> },

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Registration is invalid")]
    RegistrationInvalid { errors: Vec<ValidationError> },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl ApiError {
    #[must_use]
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn validation(errors: Vec<ValidationError>) -> Self {
        Self::Validation { errors }
    }

    #[must_use]
    pub const fn registration_invalid(errors: Vec<ValidationError>) -> Self {
        Self::RegistrationInvalid { errors }
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self::validation(vec![error])
    }
}

impl From<CheckoutError> for ApiError {
    fn from(error: CheckoutError) -> Self {
        match error {
            CheckoutError::EmptyCart => Self::EmptyCart,
            CheckoutError::Validation(error) => error.into(),
        }
    }
}

// =============================================================================
// Query Methods
// =============================================================================

impl ApiError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedBody { .. } | Self::Validation { .. } | Self::EmptyCart => {
                StatusCode::BAD_REQUEST
            }
            Self::RegistrationInvalid { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedBody { .. } => "MALFORMED_BODY",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::EmptyCart => "EMPTY_CART",
            Self::RegistrationInvalid { .. } => "REGISTRATION_INVALID",
        }
    }

    #[must_use]
    pub fn field_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation { errors } | Self::RegistrationInvalid { errors } => errors,
            Self::MalformedBody { .. } | Self::EmptyCart => &[],
        }
    }
}

// =============================================================================
// IntoResponse Implementation
// =============================================================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponseDto::new(self.error_code(), self.to_string())
            .with_errors(self.field_errors());

        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ApiError::malformed_body("expected value"), StatusCode::BAD_REQUEST, "MALFORMED_BODY")]
    #[case(ApiError::validation(vec![]), StatusCode::BAD_REQUEST, "VALIDATION_ERROR")]
    #[case(ApiError::EmptyCart, StatusCode::BAD_REQUEST, "EMPTY_CART")]
    #[case(
        ApiError::registration_invalid(vec![]),
        StatusCode::UNPROCESSABLE_ENTITY,
        "REGISTRATION_INVALID"
    )]
    fn test_status_and_code(
        #[case] error: ApiError,
        #[case] status: StatusCode,
        #[case] code: &str,
    ) {
        assert_eq!(error.status_code(), status);
        assert_eq!(error.error_code(), code);
    }

    #[rstest]
    fn test_from_checkout_error() {
        let empty: ApiError = CheckoutError::EmptyCart.into();
        assert!(matches!(empty, ApiError::EmptyCart));

        let invalid: ApiError =
            CheckoutError::Validation(ValidationError::new("Amount", "Must not be greater than 10000000"))
                .into();
        assert_eq!(invalid.field_errors().len(), 1);
        assert_eq!(invalid.error_code(), "VALIDATION_ERROR");
    }

    #[rstest]
    fn test_into_response_status() {
        let response = ApiError::EmptyCart.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
