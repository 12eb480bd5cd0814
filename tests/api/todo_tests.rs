//! Todo API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

const TODOS: &str = "/api/v1/todos";

async fn create_buy_milk(app: &TestApp) -> i64 {
    let response = app
        .post_json(
            TODOS,
            &json!({"title": "Buy milk", "description": "2%", "done": false}),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.json()["id"].as_i64().expect("numeric id")
}

#[tokio::test]
async fn test_create_then_get_returns_identical_fields() {
    let app = TestApp::new();
    let id = create_buy_milk(&app).await;

    let response = app.get(&format!("{TODOS}/{id}")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({"id": id, "title": "Buy milk", "description": "2%", "done": false})
    );
}

#[tokio::test]
async fn test_get_missing_todo_is_404_with_error_body() {
    let app = TestApp::new();

    let response = app.get(&format!("{TODOS}/999")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["message"], "Todo not found with id 999");
}

#[tokio::test]
async fn test_put_missing_todo_is_404() {
    let app = TestApp::new();

    let response = app
        .put_json(&format!("{TODOS}/999"), &json!({"title": "x", "done": true}))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["message"], "Cannot update non-existing Todo 999");
}

#[tokio::test]
async fn test_put_overwrites_every_field_with_empty_body() {
    let app = TestApp::new();
    let id = create_buy_milk(&app).await;

    let response = app
        .put_json(&format!("{TODOS}/{id}"), &json!({"title": "Buy oat milk", "done": true}))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_empty());

    let fetched = app.get(&format!("{TODOS}/{id}")).await.json();
    assert_eq!(
        fetched,
        json!({"id": id, "title": "Buy oat milk", "description": null, "done": true})
    );
}

#[tokio::test]
async fn test_delete_twice() {
    let app = TestApp::new();
    let id = create_buy_milk(&app).await;

    let first = app.delete(&format!("{TODOS}/{id}")).await;
    assert_eq!(first.status, StatusCode::NO_CONTENT);
    assert!(first.body.is_empty());

    assert_eq!(app.get(&format!("{TODOS}/{id}")).await.status, StatusCode::NOT_FOUND);

    let second = app.delete(&format!("{TODOS}/{id}")).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_contains_created_todos() {
    let app = TestApp::new();
    create_buy_milk(&app).await;
    app.post_json(TODOS, &json!({"title": "Walk dog"})).await;

    let first = app.get(TODOS).await;
    let second = app.get(TODOS).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.json().as_array().map(Vec::len), Some(2));
    assert_eq!(first.json(), second.json());
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = TestApp::new();

    let response = app.get(&format!("{TODOS}/abc")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_overlong_title_is_rejected() {
    let app = TestApp::new();

    let response = app.post_json(TODOS, &json!({"title": "x".repeat(256)})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.get(TODOS).await.json().as_array().is_some_and(Vec::is_empty));
}

#[tokio::test]
async fn test_config_readback() {
    let app = TestApp::new();

    let response = app.get(&format!("{TODOS}/test")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "hello from todos");
}

#[tokio::test]
async fn test_create_without_title_is_rejected_with_error_body() {
    let app = TestApp::new();

    let response = app.post_json(TODOS, &json!({"description": "2%"})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["code"], 10002);
    assert!(body["message"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn test_malformed_body_is_bad_request_with_error_body() {
    let app = TestApp::new();
    let id = create_buy_milk(&app).await;

    let response = app.post_raw(TODOS, "{\"title\":").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], 10002);

    let fetched = app.get(&format!("{TODOS}/{id}")).await.json();
    assert_eq!(fetched["title"], "Buy milk");
}

#[tokio::test]
async fn test_overlong_title_reports_validation_code() {
    let app = TestApp::new();

    let response = app
        .put_json(&format!("{TODOS}/1"), &json!({"title": "x".repeat(256)}))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], 10007);
}
