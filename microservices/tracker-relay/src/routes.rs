//! Router configuration for the Tracker Relay API

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use relay_core::RelayError;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::AppState;

/// Create the main router with all routes
pub fn create_router(state: AppState) -> relay_core::Result<Router> {
    let cors = cors_layer(&state.config.cors_origin)?;

    Ok(Router::new()
        // Health & Metrics
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready))
        .route("/stats", get(handlers::stats))
        // Telemetry
        .route(
            "/api/data/{device_id}",
            get(handlers::get_telemetry).post(handlers::report_telemetry),
        )
        // Commands
        .route(
            "/api/command/{device_id}",
            get(handlers::poll_command).post(handlers::issue_command),
        )
        .layer(cors)
        .with_state(state))
}

/// `*` allows every origin; anything else must be a single exact origin.
pub fn cors_layer(origin: &str) -> relay_core::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if origin.trim() == "*" {
        return Ok(layer.allow_origin(Any));
    }

    let value = HeaderValue::from_str(origin.trim())
        .map_err(|e| RelayError::Config(format!("Invalid CORS_ORIGIN '{}': {}", origin, e)))?;
    Ok(layer.allow_origin(value))
}
