//! Toto API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

const TOTOS: &str = "/api/totos";

#[tokio::test]
async fn test_create_update_get() {
    let app = TestApp::new();

    let created = app.post_json(TOTOS, &json!({"name": "x"})).await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.json()["id"].as_i64().expect("id populated");

    let updated = app.put_json(&format!("{TOTOS}/{id}"), &json!({"name": "y"})).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert!(updated.body.is_empty());

    let fetched = app.get(&format!("{TOTOS}/{id}")).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json(), json!({"id": id, "name": "y"}));
}

#[tokio::test]
async fn test_get_missing_toto_is_bare_404() {
    let app = TestApp::new();

    let response = app.get(&format!("{TOTOS}/42")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_put_missing_toto_is_404() {
    let app = TestApp::new();

    let response = app.put_json(&format!("{TOTOS}/42"), &json!({"name": "y"})).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_twice() {
    let app = TestApp::new();
    let id = app.post_json(TOTOS, &json!({"name": "x"})).await.json()["id"]
        .as_i64()
        .unwrap();

    assert_eq!(app.delete(&format!("{TOTOS}/{id}")).await.status, StatusCode::NO_CONTENT);
    assert_eq!(app.delete(&format!("{TOTOS}/{id}")).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_client_id_is_replaced_by_store_id() {
    let app = TestApp::new();

    let created = app.post_json(TOTOS, &json!({"id": 500, "name": "x"})).await.json();

    assert_ne!(created["id"], json!(500));
    assert_eq!(app.get(&format!("{TOTOS}/500")).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_totos() {
    let app = TestApp::new();
    app.post_json(TOTOS, &json!({"name": "a"})).await;
    app.post_json(TOTOS, &json!({"name": "b"})).await;

    let response = app.get(TOTOS).await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<String> = response
        .json()
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test]
async fn test_config_readback() {
    let app = TestApp::new();

    let response = app.get(&format!("{TOTOS}/test")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "hello from totos");
}

#[tokio::test]
async fn test_create_without_name_is_rejected_with_error_body() {
    let app = TestApp::new();

    let response = app.post_json(TOTOS, &json!({})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["code"], 10002);
    assert!(body["message"].as_str().unwrap().contains("name"));
    assert!(app.get(TOTOS).await.json().as_array().is_some_and(Vec::is_empty));
}

#[tokio::test]
async fn test_null_name_is_rejected() {
    let app = TestApp::new();

    let response = app.post_json(TOTOS, &json!({"name": null})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_accepts_body_without_content_type() {
    let app = TestApp::new();

    let response = app.post_raw(TOTOS, r#"{"name": "plain"}"#).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json()["name"], "plain");
}
