//! JSON error responses.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::error::ServiceError;

/// Body shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: &'static str,
}

/// Errors surfaced to HTTP callers. Internal detail is logged, never returned.
#[derive(Debug)]
pub enum ApiError {
    /// No handler for the path/method combination.
    NotFound,
    /// Any fault while building a response.
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::NotFound => ErrorResponse {
                error: "Not Found",
                message: "Endpoint does not exist",
            },
            ApiError::Internal => ErrorResponse {
                error: "Internal Server Error",
                message: "An unexpected error occurred",
            },
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        error!(error = %err, "Request failed");
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

/// Fallback for unmatched routes and unsupported methods.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Converts a handler panic into the generic 500 body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    error!(panic = detail, "Request handler panicked");

    ApiError::Internal.into_response()
}
