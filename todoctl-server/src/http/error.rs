//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Bodies carry a `detail` key: a plain string for 404/415/500, a list of
//! field errors for 422.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// One entry of a 422 response body
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub loc: Vec<&'static str>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body failed validation (422)
    Validation(ValidationError),

    /// Path parameter failed validation (422)
    InvalidPath(ValidationError),

    /// Body is not valid JSON for the expected shape (422)
    InvalidJson { message: String },

    /// Body sent without a JSON content type (415)
    UnsupportedMediaType { message: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    fn field_errors(&self) -> Vec<FieldError> {
        match self {
            Self::Validation(e) => vec![FieldError {
                loc: vec!["body", e.field()],
                msg: e.to_string(),
                kind: e.kind(),
            }],
            Self::InvalidPath(e) => vec![FieldError {
                loc: vec!["path", e.field()],
                msg: e.to_string(),
                kind: e.kind(),
            }],
            Self::InvalidJson { message } => vec![FieldError {
                loc: vec!["body"],
                msg: message.clone(),
                kind: "json_invalid",
            }],
            _ => Vec::new(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(_) | Self::InvalidPath(_) | Self::InvalidJson { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "detail": self.field_errors() }),
            ),
            Self::UnsupportedMediaType { message } => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                json!({ "detail": message }),
            ),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "Resource not found");
                (
                    StatusCode::NOT_FOUND,
                    json!({ "detail": format!("{} not found", resource) }),
                )
            }
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                let cause = match e {
                    DbError::Sqlx(inner) => inner.to_string(),
                    other => other.to_string(),
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "detail": format!("Database error: {}", cause) }),
                )
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

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(e) => Self::UnsupportedMediaType {
                message: e.body_text(),
            },
            other => Self::InvalidJson {
                message: other.body_text(),
            },
        }
    }
}
