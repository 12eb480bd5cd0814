//! Toto Repository Implementation
//!
//! PostgreSQL storage gateway for the `totos` table.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{StorageGateway, Toto, TotoDraft};
use crate::infrastructure::database::TransactionContext;
use crate::infrastructure::metrics::db_query_timer;
use crate::shared::error::StoreError;

const TABLE: &str = "totos";

/// PostgreSQL toto repository implementation.
#[derive(Clone)]
pub struct PgTotoRepository {
    pool: PgPool,
}

impl PgTotoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageGateway for PgTotoRepository {
    type Entity = Toto;
    type Tx = TransactionContext;

    async fn begin(&self) -> Result<TransactionContext, StoreError> {
        TransactionContext::begin(&self.pool).await
    }

    async fn commit(&self, tx: TransactionContext) -> Result<(), StoreError> {
        tx.commit().await
    }

    async fn load_all(&self) -> Result<Vec<Toto>, StoreError> {
        let _timer = db_query_timer("load_all", TABLE);
        let totos = sqlx::query_as::<_, Toto>("SELECT id, name FROM totos")
            .fetch_all(&self.pool)
            .await?;

        Ok(totos)
    }

    async fn load_by_id(&self, id: i64) -> Result<Option<Toto>, StoreError> {
        let _timer = db_query_timer("load_by_id", TABLE);
        let toto = sqlx::query_as::<_, Toto>("SELECT id, name FROM totos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(toto)
    }

    async fn insert(
        &self,
        tx: &mut TransactionContext,
        draft: TotoDraft,
    ) -> Result<Toto, StoreError> {
        let _timer = db_query_timer("insert", TABLE);
        let toto = sqlx::query_as::<_, Toto>(
            "INSERT INTO totos (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&draft.name)
        .fetch_one(tx.conn())
        .await?;

        Ok(toto)
    }

    async fn update_in_place<F>(
        &self,
        tx: &mut TransactionContext,
        id: i64,
        mutate: F,
    ) -> Result<bool, StoreError>
    where
        F: FnOnce(&mut Toto) + Send + 'static,
    {
        let _timer = db_query_timer("update_in_place", TABLE);
        let existing = sqlx::query_as::<_, Toto>(
            "SELECT id, name FROM totos WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(tx.conn())
        .await?;

        let Some(mut toto) = existing else {
            return Ok(false);
        };
        mutate(&mut toto);

        sqlx::query("UPDATE totos SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(&toto.name)
            .execute(tx.conn())
            .await?;

        Ok(true)
    }

    async fn delete_by_id(&self, tx: &mut TransactionContext, id: i64) -> Result<bool, StoreError> {
        let _timer = db_query_timer("delete_by_id", TABLE);
        let result = sqlx::query("DELETE FROM totos WHERE id = $1")
            .bind(id)
            .execute(tx.conn())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
