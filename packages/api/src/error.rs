// ABOUTME: HTTP error type shared by all handlers and middleware
// ABOUTME: Maps domain failures to status codes and `{"detail": ...}` bodies

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use whisper_models::ModelNotFound;
use whisper_security::AuthError;

/// Main application error type that all handlers should return
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    ModelNotFound(#[from] ModelNotFound),

    #[error("Not Found")]
    RouteNotFound,

    #[error(transparent)]
    Unauthorized(#[from] AuthError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error body, same shape for every failure
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl AppError {
    fn to_status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::ModelNotFound(_) => (StatusCode::NOT_FOUND, "MODEL_NOT_FOUND"),
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Get user-facing message (sanitized for internal errors)
    fn to_user_message(&self) -> String {
        match self {
            AppError::Internal(_) => "An internal server error occurred".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let request_id = Uuid::new_v4().to_string();
        let (status_code, error_code) = self.to_status_and_code();

        match &self {
            AppError::Internal(err) => {
                error!(
                    request_id = %request_id,
                    error = %err,
                    "Internal server error occurred"
                );
            }
            _ => {
                info!(
                    request_id = %request_id,
                    error_code = %error_code,
                    error = %self,
                    "API error response"
                );
            }
        }

        let body = ErrorResponse {
            detail: self.to_user_message(),
        };

        let mut response = (status_code, Json(body)).into_response();

        if let AppError::Unauthorized(_) = &self {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;
