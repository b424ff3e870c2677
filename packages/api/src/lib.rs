// ABOUTME: HTTP API layer for the Whisper model service providing REST endpoints and routing
// ABOUTME: Integration layer between the model registry and the hosting server

use std::sync::Arc;

use axum::{routing::get, Router};

use whisper_models::ModelRegistry;

pub mod error;
pub mod health;
pub mod models_handlers;

#[cfg(test)]
mod tests;

pub use error::{ApiResult, AppError};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ModelRegistry>,
}

impl AppState {
    pub fn new(registry: ModelRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

/// Creates the OpenAI-compatible models router (`/v1/models`)
pub fn create_models_router() -> Router<AppState> {
    Router::new()
        .route("/v1/models", get(models_handlers::list_models))
        .route("/v1/models/", get(models_handlers::get_unnamed_model))
        .route("/v1/models/{*model_name}", get(models_handlers::get_model))
}

/// Creates routes that never require credentials
pub fn create_public_router() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}
