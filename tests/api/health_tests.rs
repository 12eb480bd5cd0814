//! Health Check API Tests

use axum::http::StatusCode;

use crate::common::TestApp;

/// Test basic health check endpoint returns 200 OK
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "healthy");
}

/// Test liveness probe endpoint
#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "alive");
}

/// The in-memory store is always ready
#[tokio::test]
async fn test_readiness_probe_with_memory_store() {
    let app = TestApp::new();

    let response = app.get("/health/ready").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["database"]["status"], "healthy");
}

/// Metrics are exposed in Prometheus text format after traffic
#[tokio::test]
async fn test_metrics_endpoint() {
    let app = TestApp::new();
    app.get("/api/v1/todos").await;

    let response = app.get("/metrics").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("todo_api_http_requests_total"));
}
