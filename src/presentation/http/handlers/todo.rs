//! Todo Handlers
//!
//! A missing todo surfaces as a 404 with a JSON error body.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::parse_id;
use crate::presentation::http::extractors::ValidatedJson;
use crate::application::dto::{TodoRequest, TodoResponse};
use crate::application::services::TodoError;
use crate::shared::error::AppError;
use crate::startup::AppState;

impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(msg) => AppError::NotFound(msg),
            TodoError::Store(e) => AppError::Store(e),
        }
    }
}

/// Get all todos
pub async fn get_all_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoResponse>>, AppError> {
    let todos = state.todos.get_all().await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Get a todo by ID
pub async fn get_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo_id = parse_id(&todo_id, "todo")?;

    let todo = state.todos.get_by_id(todo_id).await?;

    Ok(Json(TodoResponse::from(todo)))
}

/// Create a new todo
pub async fn create_todo(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<TodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let created = state.todos.create(body.into()).await?;

    Ok((StatusCode::CREATED, Json(TodoResponse::from(created))))
}

/// Replace an existing todo; responds 200 with an empty body
pub async fn update_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
    ValidatedJson(body): ValidatedJson<TodoRequest>,
) -> Result<StatusCode, AppError> {
    let todo_id = parse_id(&todo_id, "todo")?;
    state.todos.update(todo_id, body.into()).await?;

    Ok(StatusCode::OK)
}

/// Delete a todo by ID
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let todo_id = parse_id(&todo_id, "todo")?;

    state.todos.delete(todo_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Return the `demo.test` configuration value for diagnostics
pub async fn get_test_config(State(state): State<AppState>) -> String {
    state.settings.demo.test.clone()
}
