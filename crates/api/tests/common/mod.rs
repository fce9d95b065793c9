#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use portfolio_api::config::ServerConfig;
use portfolio_api::middleware::admin::ADMIN_PASSWORD_HEADER;
use portfolio_api::router::build_app_router;
use portfolio_api::state::AppState;
use portfolio_db::store::ProjectStore;
use tower::ServiceExt;

pub const TEST_ADMIN_PASSWORD: &str = "test-admin-password";

/// Build a test `ServerConfig` with safe defaults and a known admin
/// password.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        admin_password: Some(TEST_ADMIN_PASSWORD.to_string()),
        database_max_connections: 5,
    }
}

/// Build the full application router around the given store, using the
/// same middleware stack as production.
pub fn build_test_app(store: Arc<dyn ProjectStore>) -> Router {
    build_test_app_with_config(store, test_config())
}

pub fn build_test_app_with_config(store: Arc<dyn ProjectStore>, config: ServerConfig) -> Router {
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn admin_get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(ADMIN_PASSWORD_HEADER, TEST_ADMIN_PASSWORD)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn admin_post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .header(ADMIN_PASSWORD_HEADER, TEST_ADMIN_PASSWORD)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST an already-encoded `application/x-www-form-urlencoded` body.
pub async fn admin_post_form(app: &Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .header(ADMIN_PASSWORD_HEADER, TEST_ADMIN_PASSWORD)
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn admin_delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(ADMIN_PASSWORD_HEADER, TEST_ADMIN_PASSWORD)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A complete project body for the admin create endpoint.
pub fn project_json(title: &str, category: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "category": category,
        "description": "Short description",
        "fullDescription": "Full description",
        "image": "/screenshots/example/1.png",
        "technologies": "React, Node.js",
    })
}
