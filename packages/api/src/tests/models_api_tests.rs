use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use whisper_models::{ModelEntry, ModelRegistry};

use crate::{create_models_router, create_public_router, health, AppState};

fn scenario_state() -> AppState {
    let registry = ModelRegistry::new(vec![
        ModelEntry::new("Systran/faster-whisper-small.en", "Systran", &["en"]),
        ModelEntry::new("Systran/faster-whisper-large-v3", "Systran", &["multilingual"]),
    ])
    .unwrap();
    AppState::new(registry)
}

fn create_test_app(state: AppState) -> Router {
    create_models_router()
        .merge(create_public_router())
        .fallback(health::not_found)
        .with_state(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = get(app, uri).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_list_models() {
    let (status, body) = get_json(create_test_app(scenario_state()), "/v1/models").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "object": "list",
            "data": [
                {
                    "id": "Systran/faster-whisper-small.en",
                    "created": 0,
                    "object": "model",
                    "owned_by": "Systran",
                    "language": ["en"]
                },
                {
                    "id": "Systran/faster-whisper-large-v3",
                    "created": 0,
                    "object": "model",
                    "owned_by": "Systran",
                    "language": ["multilingual"]
                }
            ]
        })
    );
}

#[tokio::test]
async fn test_list_models_empty_registry() {
    let state = AppState::new(ModelRegistry::new(Vec::new()).unwrap());
    let (status, body) = get_json(create_test_app(state), "/v1/models").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_get_model_with_slash_in_id() {
    let (status, body) = get_json(
        create_test_app(scenario_state()),
        "/v1/models/Systran/faster-whisper-small.en",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": "Systran/faster-whisper-small.en",
            "created": 0,
            "object": "model",
            "owned_by": "Systran",
            "language": ["en"]
        })
    );
}

#[tokio::test]
async fn test_get_unknown_model_returns_404_detail() {
    let (status, body) =
        get_json(create_test_app(scenario_state()), "/v1/models/unknown/model").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({
            "detail": "Model 'unknown/model' not supported. Supported models: \
                       Systran/faster-whisper-small.en, Systran/faster-whisper-large-v3"
        })
    );
}

#[tokio::test]
async fn test_get_model_with_empty_name() {
    let (status, body) = get_json(create_test_app(scenario_state()), "/v1/models/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["detail"],
        "Model '' not supported. Supported models: \
         Systran/faster-whisper-small.en, Systran/faster-whisper-large-v3"
    );
}

#[tokio::test]
async fn test_get_model_is_idempotent() {
    let state = scenario_state();
    let uri = "/v1/models/Systran/faster-whisper-large-v3";

    let first = get_json(create_test_app(state.clone()), uri).await;
    let second = get_json(create_test_app(state), uri).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get(create_test_app(scenario_state()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK".to_vec());
}

#[tokio::test]
async fn test_unknown_route_returns_404_detail() {
    let (status, body) = get_json(create_test_app(scenario_state()), "/v2/models").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Not Found"}));
}
