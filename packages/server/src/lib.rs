// ABOUTME: Server assembly for the Whisper model service
// ABOUTME: Wires guarded model routes, public routes and middleware, then serves them

use std::sync::Arc;

use anyhow::Context;
use axum::{middleware as axum_middleware, Router};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use whisper_api::{create_models_router, create_public_router, health, AppState};
use whisper_models::ModelRegistry;
use whisper_security::{guard_for_api_key, AuthGuard};

pub mod config;
pub mod logging;
pub mod middleware;


use config::Config;
use middleware::{api_key_middleware, create_cors_layer, create_panic_handler};

/// Assemble the full application: guarded `/v1` routes plus public routes
pub fn create_app(state: AppState, guard: Arc<dyn AuthGuard>, cors: CorsLayer) -> Router {
    let protected = create_models_router()
        .route_layer(axum_middleware::from_fn_with_state(guard, api_key_middleware));

    protected
        .merge(create_public_router())
        .fallback(health::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(create_panic_handler())
}

pub async fn run_server(config: Config, registry: ModelRegistry) -> anyhow::Result<()> {
    let model_count = registry.len();
    let guard = guard_for_api_key(config.api_key.as_deref());
    let cors = create_cors_layer(&config.cors_origin)?;
    let app = create_app(AppState::new(registry), guard, cors);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, models = model_count, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
