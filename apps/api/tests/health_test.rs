//! Integration tests for health check endpoints
//!
//! Liveness never touches the database; readiness reports 503 when
//! PostgreSQL cannot be reached.

mod common;

use axum::{body::Body, http::Request, http::StatusCode, Router};
use tower::ServiceExt;

use workforce_api::routes::{health_router, HealthState};

fn create_test_app() -> Router {
    Router::new().nest(
        "/health",
        health_router(HealthState::new(common::unreachable_pool())),
    )
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_simple_health_check() {
    let response = get(create_test_app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_liveness_probe() {
    let response = get(create_test_app(), "/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("application/json"));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "alive");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_readiness_without_database_is_unavailable() {
    let response = get(create_test_app(), "/health/ready").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let response = get(create_test_app(), "/health/nonexistent").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
