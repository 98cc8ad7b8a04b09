use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::models::ErrorResponse;
use crate::forecast::ForecastError;

/// Every client-facing failure is a validation error: the body could not be
/// read as a forecast request, or its values are out of range.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidBody(String),

    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: "validation_error".to_string(),
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
