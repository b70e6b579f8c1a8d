//! storefront-checkout-server
//!
//! HTTP server exposing the shipping fee calculator, checkout summary and
//! registration validation.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin storefront-checkout-server
//!
//! curl -X POST http://localhost:8080/shipping/quote \
//!   -H "Content-Type: application/json" \
//!   -d '{"city": "Casablanca", "subtotal": "350.00"}'
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_checkout::api::{AppState, create_router};
use storefront_checkout::config::AppConfig;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_checkout=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!("Failed to load configuration from environment: {error}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    };

    let rate_table = config.shipping.to_rate_table();
    tracing::info!(
        zone1_cities = ?rate_table.zone1_cities().collect::<Vec<_>>(),
        "Shipping rate table loaded"
    );

    let app = create_router(AppState::new(rate_table));

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("Storefront checkout server started on http://{bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Storefront checkout server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for the shutdown signal: {error}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
