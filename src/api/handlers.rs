//! axum handlers
//!
//! Handlers take the raw body as a `String` and decode it themselves, so a
//! malformed body gets the same JSON error shape as every other failure.

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::state::AppState;
use crate::checkout::summarize_order;
use crate::dto::{
    CheckoutRequestDto, OrderSummaryDto, RegistrationAcceptedDto, RegistrationDto,
    ShippingQuoteDto, ShippingQuoteRequestDto,
};
use crate::registration::validate_registration;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Health check response
#[derive(Clone, Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests
    pub status: String,
    /// Crate version
    pub version: String,
}

/// GET /health
#[allow(clippy::unused_async)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: VERSION.to_string(),
    })
}

/// POST /shipping/quote
///
/// # Errors
///
/// - `MALFORMED_BODY` for undecodable JSON
/// - `VALIDATION_ERROR` for a negative or out-of-range subtotal
#[allow(clippy::unused_async)]
pub async fn quote_shipping(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ShippingQuoteDto>, ApiError> {
    let request: ShippingQuoteRequestDto = decode(&body)?;
    let subtotal = request.to_subtotal()?;

    let quote = state.rate_table.quote(request.city.as_deref(), subtotal);
    tracing::debug!(
        city = request.city.as_deref().unwrap_or_default(),
        zone = ?quote.zone(),
        fee = %quote.fee(),
        "Shipping quoted"
    );

    Ok(Json(ShippingQuoteDto::from_domain(&quote)))
}

/// POST /checkout/summary
///
/// # Errors
///
/// - `MALFORMED_BODY` for undecodable JSON
/// - `VALIDATION_ERROR` for invalid cart lines or amounts out of range
/// - `EMPTY_CART` when no lines are submitted
#[allow(clippy::unused_async)]
pub async fn summarize_checkout(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<OrderSummaryDto>, ApiError> {
    let request: CheckoutRequestDto = decode(&body)?;
    let cart = request.to_cart().map_err(ApiError::validation)?;

    let summary = summarize_order(&state.rate_table, request.city.as_deref(), &cart)?;
    tracing::info!(
        lines = cart.lines().len(),
        subtotal = %summary.subtotal(),
        shipping_fee = %summary.shipping_fee(),
        total = %summary.total(),
        "Checkout summarized"
    );

    Ok(Json(OrderSummaryDto::from_domain(&summary)))
}

/// POST /registrations/validate
///
/// # Errors
///
/// - `MALFORMED_BODY` for undecodable JSON
/// - `REGISTRATION_INVALID` with every failing field
#[allow(clippy::unused_async)]
pub async fn validate_registration_form(
    body: String,
) -> Result<Json<RegistrationAcceptedDto>, ApiError> {
    let request: RegistrationDto = decode(&body)?;

    let registration = validate_registration(&request.to_unvalidated_registration())
        .map_err(|errors| {
            tracing::info!(error_count = errors.len(), "Registration rejected");
            ApiError::registration_invalid(errors)
        })?;

    Ok(Json(RegistrationAcceptedDto::from_domain(&registration)))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|error| {
        tracing::warn!(%error, "Rejected malformed request body");
        ApiError::malformed_body(error.to_string())
    })
}
