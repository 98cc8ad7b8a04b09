use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{debug, warn};

use crate::api::error::ApiError;
use crate::api::models::{ForecastRequest, ForecastResponse, HealthResponse};
use crate::api::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: state.service_name.clone(),
    })
}

/// POST /forecast
pub async fn forecast(
    State(state): State<AppState>,
    payload: Result<Json<ForecastRequest>, JsonRejection>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected forecast request: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    debug!("Forecast request: {:?}", request);

    let (source, horizon) = request.into_parts();
    let forecast = state.engine.run(source, horizon).map_err(|e| {
        warn!("Invalid forecast request: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(ForecastResponse { forecast }))
}
