//! In-memory storage gateway.
//!
//! Keeps one table per resource kind behind an async mutex. A transaction
//! holds the table lock for its whole lifetime and works on a staged copy,
//! which replaces the table on commit; dropping it discards the copy.
//! Reads outside a transaction wait for any open transaction to finish.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::{Resource, StorageGateway, Todo, Toto};
use crate::shared::error::StoreError;

type Rows<E> = BTreeMap<i64, E>;

/// In-memory gateway for any resource kind.
pub struct MemoryGateway<E: Resource> {
    rows: Arc<Mutex<Rows<E>>>,
    // Never rewound on rollback, like a database sequence.
    next_id: AtomicI64,
}

/// Open transaction on a [`MemoryGateway`].
pub struct MemoryTx<E: Resource> {
    guard: OwnedMutexGuard<Rows<E>>,
    staged: Rows<E>,
}

pub type MemoryTodoRepository = MemoryGateway<Todo>;
pub type MemoryTotoRepository = MemoryGateway<Toto>;

impl<E: Resource> MemoryGateway<E> {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<E: Resource> Default for MemoryGateway<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Resource> StorageGateway for MemoryGateway<E> {
    type Entity = E;
    type Tx = MemoryTx<E>;

    async fn begin(&self) -> Result<MemoryTx<E>, StoreError> {
        let guard = Arc::clone(&self.rows).lock_owned().await;
        let staged = guard.clone();
        Ok(MemoryTx { guard, staged })
    }

    async fn commit(&self, tx: MemoryTx<E>) -> Result<(), StoreError> {
        let MemoryTx { mut guard, staged } = tx;
        *guard = staged;
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<E>, StoreError> {
        Ok(self.rows.lock().await.values().cloned().collect())
    }

    async fn load_by_id(&self, id: i64) -> Result<Option<E>, StoreError> {
        Ok(self.rows.lock().await.get(&id).cloned())
    }

    async fn insert(&self, tx: &mut MemoryTx<E>, draft: E::Draft) -> Result<E, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let entity = E::assemble(id, draft);
        tx.staged.insert(id, entity.clone());
        Ok(entity)
    }

    async fn update_in_place<F>(
        &self,
        tx: &mut MemoryTx<E>,
        id: i64,
        mutate: F,
    ) -> Result<bool, StoreError>
    where
        F: FnOnce(&mut E) + Send + 'static,
    {
        match tx.staged.get_mut(&id) {
            Some(entity) => {
                mutate(entity);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, tx: &mut MemoryTx<E>, id: i64) -> Result<bool, StoreError> {
        Ok(tx.staged.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TodoDraft;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = MemoryTodoRepository::new();
        let mut tx = repo.begin().await.unwrap();
        let first = repo.insert(&mut tx, TodoDraft::new("a", None, false)).await.unwrap();
        let second = repo.insert(&mut tx, TodoDraft::new("b", None, false)).await.unwrap();
        repo.commit(tx).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(repo.load_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_dropped_transaction_rolls_back() {
        let repo = MemoryTodoRepository::new();
        {
            let mut tx = repo.begin().await.unwrap();
            repo.insert(&mut tx, TodoDraft::new("lost", None, false)).await.unwrap();
        }

        assert!(repo.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_rollback() {
        let repo = MemoryTodoRepository::new();
        let rolled_back = {
            let mut tx = repo.begin().await.unwrap();
            let todo = repo.insert(&mut tx, TodoDraft::new("lost", None, false)).await.unwrap();
            todo
        };

        let mut tx = repo.begin().await.unwrap();
        let kept = repo.insert(&mut tx, TodoDraft::new("kept", None, false)).await.unwrap();
        repo.commit(tx).await.unwrap();

        assert!(kept.id > rolled_back.id);
    }

    #[tokio::test]
    async fn test_update_in_place_missing_row_writes_nothing() {
        let repo = MemoryTodoRepository::new();
        let mut tx = repo.begin().await.unwrap();
        let updated = repo
            .update_in_place(&mut tx, 42, |todo| todo.done = true)
            .await
            .unwrap();
        repo.commit(tx).await.unwrap();

        assert!(!updated);
        assert_eq!(repo.load_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_by_id_reports_removal() {
        let repo = MemoryTodoRepository::new();
        let mut tx = repo.begin().await.unwrap();
        let todo = repo.insert(&mut tx, TodoDraft::new("x", None, false)).await.unwrap();
        repo.commit(tx).await.unwrap();

        let mut tx = repo.begin().await.unwrap();
        assert!(repo.delete_by_id(&mut tx, todo.id).await.unwrap());
        assert!(!repo.delete_by_id(&mut tx, todo.id).await.unwrap());
        repo.commit(tx).await.unwrap();

        assert_eq!(repo.load_by_id(todo.id).await.unwrap(), None);
    }
}
