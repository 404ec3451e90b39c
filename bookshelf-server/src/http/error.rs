//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Each body carries `error` (a stable code) and `message`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body could not be parsed (422)
    Unprocessable,

    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Database error; status and message are chosen by the handler (logged)
    Database {
        status: StatusCode,
        message: &'static str,
        source: DbError,
    },
}

impl ApiError {
    /// Map a repository error, keeping NotFound as 404.
    pub fn from_db(source: DbError, status: StatusCode, message: &'static str) -> Self {
        match source {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            source => Self::Database {
                status,
                message,
                source,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Unprocessable => json!({
                "error": "unprocessable_entity",
                "message": "request failed"
            }),
            Self::Validation(e) => json!({
                "error": "validation_error",
                "message": e.to_string()
            }),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "Lookup missed");
                json!({
                    "error": "not_found",
                    "message": format!("{} not found", resource)
                })
            }
            Self::Database {
                message, source, ..
            } => {
                // Log the actual error, return the handler's message
                tracing::error!(error = %source, "{}", message);
                json!({
                    "error": "database_error",
                    "message": message
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
