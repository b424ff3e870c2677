// ABOUTME: Liveness probe and fallback handlers
// ABOUTME: Routes that answer without touching the model registry

use axum::http::StatusCode;

use crate::error::AppError;

/// Liveness probe, always reachable without credentials
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

/// Fallback for paths no route matches
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}
