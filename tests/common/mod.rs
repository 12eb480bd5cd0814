//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use todo_api::config::{
    CorsSettings, DatabaseSettings, DemoSettings, ServerSettings, Settings, StorageBackend,
};
use todo_api::startup::{build_router, AppState};

/// Response status plus the raw body.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Body parsed as JSON
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    /// Body as UTF-8 text
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is UTF-8")
    }
}

/// Settings for tests: in-memory storage, no files or environment involved.
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseSettings {
            backend: StorageBackend::Memory,
            url: String::new(),
            max_connections: 1,
            min_connections: 0,
            acquire_timeout: 1,
            auto_create_schema: false,
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        demo: DemoSettings {
            test: "hello from todos".into(),
            patate: "hello from totos".into(),
        },
        environment: "test".into(),
    }
}

/// Test application builder
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a new test application backed by empty in-memory tables
    pub fn new() -> Self {
        Self {
            router: build_router(AppState::in_memory(test_settings())),
        }
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
        TestResponse { status, body }
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a DELETE request to the application
    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(json_request("POST", uri, body)).await
    }

    /// Make a POST request with a raw body and no `Content-Type` header
    pub async fn post_raw(&self, uri: &str, body: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(json_request("PUT", uri, body)).await
    }
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
