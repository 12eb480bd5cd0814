//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{middleware, response::IntoResponse, routing::get, Router};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::track_metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(todo_routes())
        .merge(toto_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// Todo routes
fn todo_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/todos",
            get(handlers::todo::get_all_todos).post(handlers::todo::create_todo),
        )
        .route("/api/v1/todos/test", get(handlers::todo::get_test_config))
        .route(
            "/api/v1/todos/{todo_id}",
            get(handlers::todo::get_todo)
                .put(handlers::todo::update_todo)
                .delete(handlers::todo::delete_todo),
        )
}

/// Toto routes
fn toto_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/totos",
            get(handlers::toto::get_all_totos).post(handlers::toto::create_toto),
        )
        .route("/api/totos/test", get(handlers::toto::get_patate))
        .route(
            "/api/totos/{toto_id}",
            get(handlers::toto::get_toto)
                .put(handlers::toto::update_toto)
                .delete(handlers::toto::delete_toto),
        )
}
