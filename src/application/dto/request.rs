//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;
use validator::Validate;

use crate::domain::TodoDraft;

/// Create or replace todo request
#[derive(Debug, Deserialize, Validate)]
pub struct TodoRequest {
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: String,

    #[validate(length(max = 255, message = "Description must be at most 255 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    pub done: bool,
}

impl From<TodoRequest> for TodoDraft {
    fn from(request: TodoRequest) -> Self {
        TodoDraft {
            title: request.title,
            description: request.description,
            done: request.done,
        }
    }
}
