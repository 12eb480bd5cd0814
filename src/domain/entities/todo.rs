//! Todo entity.
//!
//! Maps to the `todos` table in the database schema.

use serde::{Deserialize, Serialize};

use crate::domain::gateway::Resource;

/// A persisted todo item.
///
/// Maps to the `todos` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - title: VARCHAR(255) NOT NULL
/// - description: VARCHAR(255) NULL
/// - done: BOOLEAN NOT NULL DEFAULT FALSE
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    /// Store-assigned primary key, immutable after creation
    pub id: i64,

    pub title: String,

    pub description: Option<String>,

    pub done: bool,
}

/// A todo that has not been persisted yet, or the replacement data for an
/// existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: Option<String>,
    pub done: bool,
}

impl TodoDraft {
    pub fn new(title: impl Into<String>, description: Option<String>, done: bool) -> Self {
        Self {
            title: title.into(),
            description,
            done,
        }
    }
}

impl Resource for Todo {
    type Draft = TodoDraft;

    const NAME: &'static str = "Todo";

    fn id(&self) -> i64 {
        self.id
    }

    fn assemble(id: i64, draft: TodoDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            done: draft.done,
        }
    }

    fn overwrite(&mut self, draft: TodoDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.done = draft.done;
    }
}
