//! HTTP API layer
//!
//! Exposes the shipping calculator, checkout summary and registration schema
//! as JSON endpoints. Domain logic stays in the library modules; this layer
//! only decodes, delegates and maps errors to status codes.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
