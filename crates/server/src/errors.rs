use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

pub const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";
pub const VALIDATION_ERRORS: &str = "validation errors";
pub const INVALID_REFERENCE: &str = "Invalid pizza or restaurant ID";
pub const CREATE_RESTAURANT_PIZZA_FAILED: &str = "An error occurred while creating the restaurant pizza";

/// Error returned by handlers; the message is what the client sees.
///
/// 404 renders as `{"error": msg}`, 400 and 500 as `{"errors": [msg]}`.
/// Internal causes are logged at the call site, never put in the body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(&'static str),
    #[error("{0}")]
    InvalidReference(&'static str),
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    pub fn restaurant_not_found() -> Self { Self::NotFound(RESTAURANT_NOT_FOUND) }
    pub fn validation() -> Self { Self::Validation(VALIDATION_ERRORS) }
    pub fn invalid_reference() -> Self { Self::InvalidReference(INVALID_REFERENCE) }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::InvalidReference(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::NotFound(msg) => serde_json::json!({ "error": msg }),
            ApiError::Validation(msg) | ApiError::InvalidReference(msg) | ApiError::Internal(msg) => {
                serde_json::json!({ "errors": [msg] })
            }
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("migration failed: {0}")]
    Migration(String),
}
