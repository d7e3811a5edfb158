#![allow(dead_code)]

use std::sync::Arc;

use adora_api::config::{ServerConfig, StoreBackend};
use adora_api::router::build_app_router;
use adora_api::state::AppState;
use adora_db::store::{DocumentStore, MemoryDocumentStore};
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: String::new(),
        strict_mutations: false,
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// Clones of the returned router share the same store, so a test can issue
/// several requests with `app.clone()`.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config())
}

pub fn build_test_app_with(config: ServerConfig) -> Router {
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryDocumentStore::new());
    build_app_router(AppState::new(store, config))
}

pub fn strict_config() -> ServerConfig {
    ServerConfig {
        strict_mutations: true,
        ..test_config()
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, json: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Body::from(json.to_string())).await
}

/// Send a raw (possibly malformed) body.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    send(app, method, uri, Body::from(body.to_string())).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
