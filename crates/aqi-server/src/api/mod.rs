//! Routes and handlers.

mod handlers;


use axum::routing::{get, post};
use axum::Router;

pub use handlers::{calc_aqi, chemistry_info, root, AppJson, StatusMessage};

/// Routes without middleware. See [`crate::app`] for the served stack.
pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/calc-aqi", post(calc_aqi))
        .route("/api/chemistry-info", get(chemistry_info))
}
