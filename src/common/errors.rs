use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde_json::json;
use std::fmt;

/// Application error type covering the whole API surface.
///
/// Every variant renders to the `{"success": false, "message": ...}` JSON
/// envelope the dashboard front end expects; internal errors additionally
/// carry the underlying detail in an `error` field.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Invalid or missing user input (400 Bad Request)
    Validation { message: String },
    /// Missing or rejected credentials (401 Unauthorized)
    Unauthorized { message: String },
    /// Resource not found (404 Not Found)
    NotFound { message: String },
    /// Database or other unexpected failure (500 Internal Server Error)
    Internal { message: String, detail: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, detail: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Wrap a database error with the endpoint-specific Spanish context
    /// message the original wire format uses.
    pub fn db(err: DbErr, message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            detail: err.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation { message }
            | ApiError::Unauthorized { message }
            | ApiError::NotFound { message } => write!(f, "{message}"),
            ApiError::Internal { message, detail } => write!(f, "{message}: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation { message } => (
                StatusCode::BAD_REQUEST,
                json!({"success": false, "message": message}),
            ),
            ApiError::Unauthorized { message } => (
                StatusCode::UNAUTHORIZED,
                json!({"success": false, "message": message}),
            ),
            ApiError::NotFound { message } => (
                StatusCode::NOT_FOUND,
                json!({"success": false, "message": message}),
            ),
            ApiError::Internal { message, detail } => {
                tracing::error!("{message}: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"success": false, "message": message, "error": detail}),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback conversion for handlers without a more specific context message.
impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        ApiError::Internal {
            message: "Error interno del servidor".to_string(),
            detail: err.to_string(),
        }
    }
}

/// Result type alias used across the route handlers
pub type ApiResult<T> = Result<T, ApiError>;
