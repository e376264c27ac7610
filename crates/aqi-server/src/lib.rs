//! HTTP API for the AQI chemistry service.
//!
//! Exposes the evaluator from `aqi-core` over three JSON endpoints:
//!
//! - `GET /` - liveness message
//! - `POST /api/calc-aqi` - evaluate six pollutant readings
//! - `GET /api/chemistry-info` - static chemistry reference lists

pub mod api;
pub mod cors;
pub mod error;

use std::future;

use aqi_config::ServerConfig;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, warn, Level};

pub use error::{ApiError, ServerError};

/// Builds the full application: routes plus CORS and request tracing.
///
/// # Errors
///
/// Returns [`ServerError::InvalidOrigin`] if a configured origin is not a
/// valid header value.
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let cors = cors::cors_layer(&config.cors)?;
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Ok(api::router().layer(cors).layer(trace))
}

/// Validates `config`, binds the listener and serves until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    config.validate()?;
    let app = app(&config)?;

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(
        event = "server_start",
        address = %addr,
        cors_mode = %config.cors.mode,
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!(event = "shutdown");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("could not install Ctrl-C handler: {}", e);
        future::pending::<()>().await;
    }
}
