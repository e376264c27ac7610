//! Cross-origin policy.
//!
//! Development mode reproduces the wide-open policy a local frontend
//! needs: any origin, method and header, with credentials. Browsers refuse
//! a literal `*` alongside credentials, so the request's own values are
//! mirrored back instead.

use aqi_config::{CorsConfig, CorsMode};
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::error::ServerError;

/// Builds the CORS layer for `config`.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, ServerError> {
    let layer = match config.mode {
        CorsMode::Development => CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request()),
        CorsMode::Production => {
            let origins = config
                .allowed_origins
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin).map_err(|source| ServerError::InvalidOrigin {
                        origin: origin.clone(),
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE])
        }
    };

    Ok(layer.allow_credentials(config.allow_credentials))
}
