// ABOUTME: API key authentication middleware for request authorization
// ABOUTME: Runs the configured AuthGuard before requests reach the model handlers

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use whisper_api::AppError;
use whisper_security::AuthGuard;

/// Extract the token from an `Authorization: Bearer <token>` header value
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// API key validation middleware
///
/// On success the caller's [`whisper_security::Identity`] is stored in the
/// request extensions.
pub async fn api_key_middleware(
    State(guard): State<Arc<dyn AuthGuard>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let credentials = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token);

    let identity = guard.validate(credentials).map_err(|e| {
        warn!(path = %request.uri().path(), error = %e, "Rejected unauthenticated request");
        AppError::from(e)
    })?;

    debug!(path = %request.uri().path(), identity = ?identity, "Request authenticated");

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}
