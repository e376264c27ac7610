use aqi_core::{AqiResult, ChemistryInfo, PollutantReading};
use axum::extract::FromRequest;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;

/// JSON body extractor whose rejections render as [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: &'static str,
}

/// GET / - liveness message.
pub async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: "AQI Chemistry Backend is running!",
    })
}

/// POST /api/calc-aqi - evaluates six pollutant readings.
pub async fn calc_aqi(
    AppJson(reading): AppJson<PollutantReading>,
) -> Result<Json<AqiResult>, ApiError> {
    let result = aqi_core::evaluate(&reading)?;

    info!(
        event = "evaluation",
        aqi = result.aqi,
        category = %result.category,
        dominant = %result.dominant_pollutant,
    );

    Ok(Json(result))
}

/// GET /api/chemistry-info - static reference lists.
pub async fn chemistry_info() -> Json<ChemistryInfo> {
    Json(aqi_core::chemistry_info())
}
