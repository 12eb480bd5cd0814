//! Todo Service
//!
//! Fail-loud resource contract: a missing todo is an error on every
//! id-addressed operation.

use std::sync::Arc;

use async_trait::async_trait;

use super::resource_service::ResourceService;
use crate::domain::{StorageGateway, Todo, TodoDraft};
use crate::shared::error::StoreError;

/// Todo service trait
#[async_trait]
pub trait TodoService: Send + Sync {
    /// Get every todo
    async fn get_all(&self) -> Result<Vec<Todo>, TodoError>;

    /// Get todo by ID
    async fn get_by_id(&self, id: i64) -> Result<Todo, TodoError>;

    /// Create a todo; the store assigns its id
    async fn create(&self, draft: TodoDraft) -> Result<Todo, TodoError>;

    /// Overwrite every field of an existing todo
    async fn update(&self, id: i64, draft: TodoDraft) -> Result<(), TodoError>;

    /// Delete a todo
    async fn delete(&self, id: i64) -> Result<(), TodoError>;
}

/// Todo service errors
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// TodoService implementation
pub struct TodoServiceImpl<G>
where
    G: StorageGateway<Entity = Todo>,
{
    resources: ResourceService<G>,
}

impl<G> TodoServiceImpl<G>
where
    G: StorageGateway<Entity = Todo>,
{
    pub fn new(todo_repo: Arc<G>) -> Self {
        Self {
            resources: ResourceService::new(todo_repo),
        }
    }
}

#[async_trait]
impl<G> TodoService for TodoServiceImpl<G>
where
    G: StorageGateway<Entity = Todo>,
{
    async fn get_all(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.resources.list().await?)
    }

    async fn get_by_id(&self, id: i64) -> Result<Todo, TodoError> {
        self.resources
            .find(id)
            .await?
            .found_or_else(|| TodoError::NotFound(format!("Todo not found with id {}", id)))
    }

    async fn create(&self, draft: TodoDraft) -> Result<Todo, TodoError> {
        Ok(self.resources.create(draft).await?)
    }

    async fn update(&self, id: i64, draft: TodoDraft) -> Result<(), TodoError> {
        self.resources
            .replace(id, draft)
            .await?
            .found_or_else(|| TodoError::NotFound(format!("Cannot update non-existing Todo {}", id)))
    }

    async fn delete(&self, id: i64) -> Result<(), TodoError> {
        self.resources
            .remove(id)
            .await?
            .found_or_else(|| TodoError::NotFound(format!("Cannot delete non-existing Todo {}", id)))
    }
}
