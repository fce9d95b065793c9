//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, send};
use portfolio_db::store::MemoryProjectStore;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = common::build_test_app(Arc::new(MemoryProjectStore::new()));
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["database_configured"], true);
    assert_eq!(json["db_healthy"], true);
}

// ---------------------------------------------------------------------------
// Test: a missing database degrades health but still answers 200
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_without_database_is_degraded() {
    let app = common::build_test_app(Arc::new(MemoryProjectStore::unconfigured()));
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["database_configured"], false);
    assert_eq!(json["db_healthy"], false);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(Arc::new(MemoryProjectStore::new()));
    let response = get(&app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight admits the admin password header
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_allows_admin_requests_from_configured_origin() {
    let app = common::build_test_app(Arc::new(MemoryProjectStore::new()));
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/admin/projects/1")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "DELETE")
        .header("access-control-request-headers", "x-admin-password")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    let headers = response.headers();
    assert_eq!(
        headers.get("access-control-allow-origin").unwrap(),
        "http://localhost:3000"
    );
    let allowed = headers
        .get("access-control-allow-headers")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(allowed.contains("x-admin-password"));
}

#[test]
fn invalid_cors_origins_are_skipped() {
    let mut config = common::test_config();
    config.cors_origins = vec!["bad\norigin".to_string(), "http://localhost:3000".to_string()];
    // Builds without panicking.
    let _ = portfolio_api::router::build_cors_layer(&config);
}
