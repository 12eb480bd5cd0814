//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::Todo;

/// Todo response
#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub done: bool,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            done: todo.done,
        }
    }
}
