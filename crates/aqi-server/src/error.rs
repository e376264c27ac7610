//! Error types for the HTTP layer.

use std::io;
use std::net::SocketAddr;

use aqi_config::ConfigError;
use aqi_core::AqiError;
use axum::extract::rejection::JsonRejection;
use axum::http::header::InvalidHeaderValue;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Errors turned into client responses.
///
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body was missing, not JSON, or lacked a numeric field.
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    /// The reading parsed but has no finite index.
    #[error(transparent)]
    Evaluation(#[from] AqiError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::Evaluation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        warn!(event = "rejected", status = status.as_u16(), reason = %message);
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Startup failures.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid CORS origin {origin:?}: {source}")]
    InvalidOrigin {
        origin: String,
        source: InvalidHeaderValue,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },

    #[error("Server error: {0}")]
    Serve(io::Error),
}
