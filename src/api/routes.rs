//! Route configuration
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | /health | `health_check` |
//! | POST | /shipping/quote | `quote_shipping` |
//! | POST | /checkout/summary | `summarize_checkout` |
//! | POST | /registrations/validate | `validate_registration_form` |

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Builds the router with every route, request tracing and shared state
///
/// # Examples
///
/// ```ignore
/// use storefront_checkout::api::{AppState, create_router};
///
/// let router = create_router(AppState::default());
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/shipping/quote", post(handlers::quote_shipping))
        .route("/checkout/summary", post(handlers::summarize_checkout))
        .route(
            "/registrations/validate",
            post(handlers::validate_registration_form),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
