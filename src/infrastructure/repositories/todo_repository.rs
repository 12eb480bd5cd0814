//! Todo Repository Implementation
//!
//! PostgreSQL storage gateway for the `todos` table.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{StorageGateway, Todo, TodoDraft};
use crate::infrastructure::database::TransactionContext;
use crate::infrastructure::metrics::db_query_timer;
use crate::shared::error::StoreError;

const TABLE: &str = "todos";

/// PostgreSQL todo repository implementation.
#[derive(Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    /// Create a new PgTodoRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageGateway for PgTodoRepository {
    type Entity = Todo;
    type Tx = TransactionContext;

    async fn begin(&self) -> Result<TransactionContext, StoreError> {
        TransactionContext::begin(&self.pool).await
    }

    async fn commit(&self, tx: TransactionContext) -> Result<(), StoreError> {
        tx.commit().await
    }

    async fn load_all(&self) -> Result<Vec<Todo>, StoreError> {
        let _timer = db_query_timer("load_all", TABLE);
        let todos = sqlx::query_as::<_, Todo>("SELECT id, title, description, done FROM todos")
            .fetch_all(&self.pool)
            .await?;

        Ok(todos)
    }

    async fn load_by_id(&self, id: i64) -> Result<Option<Todo>, StoreError> {
        let _timer = db_query_timer("load_by_id", TABLE);
        let todo = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, done FROM todos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(todo)
    }

    async fn insert(
        &self,
        tx: &mut TransactionContext,
        draft: TodoDraft,
    ) -> Result<Todo, StoreError> {
        let _timer = db_query_timer("insert", TABLE);
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (title, description, done)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, done
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.done)
        .fetch_one(tx.conn())
        .await?;

        Ok(todo)
    }

    async fn update_in_place<F>(
        &self,
        tx: &mut TransactionContext,
        id: i64,
        mutate: F,
    ) -> Result<bool, StoreError>
    where
        F: FnOnce(&mut Todo) + Send + 'static,
    {
        let _timer = db_query_timer("update_in_place", TABLE);
        let existing = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, done FROM todos WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(tx.conn())
        .await?;

        let Some(mut todo) = existing else {
            return Ok(false);
        };
        mutate(&mut todo);

        sqlx::query(
            r#"
            UPDATE todos
            SET title = $2,
                description = $3,
                done = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.done)
        .execute(tx.conn())
        .await?;

        Ok(true)
    }

    async fn delete_by_id(&self, tx: &mut TransactionContext, id: i64) -> Result<bool, StoreError> {
        let _timer = db_query_timer("delete_by_id", TABLE);
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(tx.conn())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
