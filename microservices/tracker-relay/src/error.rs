//! Error types for Tracker Relay

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::MessageResponse;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Tracker Relay error types
///
/// Unknown devices and missing commands are answered with defaults, so the
/// only request-level failure is a malformed telemetry report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Telemetry body is not JSON or has the wrong shape
    #[error("Invalid telemetry: {0}")]
    InvalidTelemetry(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::InvalidTelemetry(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
