use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::db::DatabaseError;
use crate::scheduling::SchedulingError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Scheduling error: {0}")]
    Scheduling(#[from] SchedulingError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Error bodies are flat `{ "error": ..., "details"?: ... }`; the
        // exact strings for validation failures are part of the API contract.
        let (status, error, details) = match &self {
            AppError::Database(err) => match err {
                DatabaseError::NotFound => {
                    (StatusCode::NOT_FOUND, "Resource not found".to_string(), None)
                }
                DatabaseError::Duplicate => (
                    StatusCode::CONFLICT,
                    "Resource already exists".to_string(),
                    None,
                ),
                DatabaseError::InvalidInput(msg) => {
                    (StatusCode::BAD_REQUEST, msg.clone(), None)
                }
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                    Some(err.to_string()),
                ),
            },
            AppError::Scheduling(err) => match err {
                SchedulingError::InvalidWorkshop { .. }
                | SchedulingError::MainWorkshopNotFound(_) => (
                    StatusCode::BAD_REQUEST,
                    "Error resolving workshop_id".to_string(),
                    Some(err.to_string()),
                ),
                SchedulingError::ServiceNotFound(_) => {
                    (StatusCode::NOT_FOUND, err.to_string(), None)
                }
                SchedulingError::DataAccess(inner) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                    Some(inner.to_string()),
                ),
            },
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone(), None),
            AppError::InternalServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred".to_string(),
                Some(msg.clone()),
            ),
        };

        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        }

        let body = match details {
            Some(details) => Json(json!({ "error": error, "details": details })),
            None => Json(json!({ "error": error })),
        };

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
