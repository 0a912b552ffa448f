use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::Detail;
use models::validation::FieldErrors;
use service::errors::ServiceError;
use service::shop::filter::FilterError;
use thiserror::Error;
use tracing::{debug, error};

/// Error returned by every handler.
///
/// - `NotFound` → 404 `{"detail": "Not found."}`
/// - `Validation` → 400 with per-field messages
/// - `Rejected` → the extractor's own status, message as `detail`
/// - `Internal` → 500, logged
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation error: {0}")]
    Validation(FieldErrors),
    #[error("{1}")]
    Rejected(StatusCode, String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(errors) => Self::Validation(errors),
            ServiceError::Model(models::errors::ModelError::Validation(errors)) => Self::Validation(errors),
            ServiceError::NotFound(what) => Self::NotFound(what),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<FilterError> for ApiError {
    fn from(e: FilterError) -> Self { Self::NotFound(e.to_string()) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(reason) => {
                debug!(%reason, "not found");
                (StatusCode::NOT_FOUND, Json(Detail::not_found())).into_response()
            }
            ApiError::Validation(errors) => {
                debug!(%errors, "validation failed");
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            ApiError::Rejected(status, msg) => (status, Json(Detail::new(msg))).into_response(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(Detail::new(msg))).into_response()
            }
        }
    }
}
