// ABOUTME: HTTP request handlers for model registry queries
// ABOUTME: Lists supported models and describes a single model by id

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use whisper_models::{ModelList, ModelRecord};

use crate::error::ApiResult;
use crate::AppState;

/// List all supported models in registry order
pub async fn list_models(State(state): State<AppState>) -> Json<ModelList> {
    info!(count = state.registry.len(), "Listing models from registry");

    Json(ModelList::new(state.registry.list_models()))
}

/// Get a single model by id; ids may contain `/`
pub async fn get_model(
    State(state): State<AppState>,
    Path(model_name): Path<String>,
) -> ApiResult<Json<ModelRecord>> {
    info!(model = %model_name, "Getting model from registry");

    let model = state.registry.get_model(&model_name)?;
    Ok(Json(model))
}

/// `/v1/models/` with nothing after the slash; looked up as the empty id
pub async fn get_unnamed_model(State(state): State<AppState>) -> ApiResult<Json<ModelRecord>> {
    info!(model = "", "Getting model from registry");

    let model = state.registry.get_model("")?;
    Ok(Json(model))
}
