//! Transaction scope for the PostgreSQL gateways.
//!
//! A resource service opens one `TransactionContext` per mutating call and
//! commits it once the existence check and the write have both succeeded.
//! Dropping the context without committing rolls the transaction back.

use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::shared::error::StoreError;

/// Transaction context that wraps a SQLx transaction.
pub struct TransactionContext {
    tx: Transaction<'static, Postgres>,
}

impl TransactionContext {
    /// Begin a new transaction on `pool`.
    pub async fn begin(pool: &PgPool) -> Result<Self, StoreError> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// Connection to run queries on inside this transaction.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    /// Commit the transaction.
    pub async fn commit(self) -> Result<(), StoreError> {
        self.tx.commit().await.map_err(StoreError::Database)
    }
}
