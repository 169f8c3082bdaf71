//! Error translation from domain errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jardim_core::GardenError;
use log::error;
use serde_json::json;

/// Wrapper making [`GardenError`] usable as an axum response.
///
/// Bodies follow the `{"detail": <message>}` shape on every error path.
pub struct ApiError(GardenError);

impl From<GardenError> for ApiError {
    fn from(err: GardenError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            GardenError::GardenerNotFound { .. }
            | GardenError::SpeciesNotFound { .. }
            | GardenError::PlantNotFound { .. }
            | GardenError::EntryNotFound { .. } => StatusCode::NOT_FOUND,
            GardenError::EmailTaken { .. } | GardenError::SpeciesExists { .. } => {
                StatusCode::BAD_REQUEST
            }
            GardenError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Request failed: {}", self.0);
        }

        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}

/// Result alias for JSON route handlers.
pub type ApiResult<T> = Result<Json<T>, ApiError>;
