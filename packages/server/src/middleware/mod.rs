//! Middleware modules for authentication, CORS and panic recovery

pub mod api_key;

pub use api_key::api_key_middleware;

use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
};
use tracing::error;

use crate::config::ConfigError;

/// Create a panic handler that returns consistent error responses
pub fn create_panic_handler(
) -> CatchPanicLayer<fn(Box<dyn std::any::Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(handle_panic)
}

/// Handle panic with logging and a sanitized response
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let panic_message = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic occurred"
    };

    error!(panic_message = %panic_message, "Server panic occurred");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"detail": "An internal server error occurred"})),
    )
        .into_response()
}

/// Build the CORS layer for read-only access; `*` allows any origin
pub fn create_cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    if origin.trim() == "*" {
        return Ok(cors.allow_origin(Any));
    }

    let origin = origin
        .trim()
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidCorsOrigin(origin.to_string()))?;
    Ok(cors.allow_origin(origin))
}
