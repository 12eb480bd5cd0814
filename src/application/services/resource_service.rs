//! Generic Resource Service
//!
//! Existence-checked CRUD over a [`StorageGateway`]. Every mutating call
//! opens one transaction that spans both the existence check and the write,
//! so a caller never observes a passed check without the matching write.
//! Absence is reported as [`Lookup::NotFound`]; the policy services decide
//! whether that becomes an error or a sentinel value.

use std::sync::Arc;

use crate::domain::{Lookup, Resource, StorageGateway};
use crate::infrastructure::metrics::record_resource_operation;
use crate::shared::error::StoreError;

type Draft<G> = <<G as StorageGateway>::Entity as Resource>::Draft;

/// Shared core behind the Todo and Toto services.
pub struct ResourceService<G: StorageGateway> {
    gateway: Arc<G>,
}

impl<G: StorageGateway> Clone for ResourceService<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G: StorageGateway> ResourceService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Every persisted entity.
    pub async fn list(&self) -> Result<Vec<G::Entity>, StoreError> {
        self.gateway.load_all().await
    }

    /// The entity with `id`, if any.
    pub async fn find(&self, id: i64) -> Result<Lookup<G::Entity>, StoreError> {
        let entity = self.gateway.load_by_id(id).await?;
        record_resource_operation(G::Entity::NAME, "get", entity.is_some());
        Ok(Lookup::from(entity))
    }

    /// Persist `draft` and return it with the store-assigned id.
    pub async fn create(&self, draft: Draft<G>) -> Result<G::Entity, StoreError> {
        let mut tx = self.gateway.begin().await?;
        let entity = self.gateway.insert(&mut tx, draft).await?;
        self.gateway.commit(tx).await?;

        tracing::debug!(resource = G::Entity::NAME, id = entity.id(), "Created");
        Ok(entity)
    }

    /// Overwrite every mutable field of the entity with `id`.
    pub async fn replace(&self, id: i64, draft: Draft<G>) -> Result<Lookup<()>, StoreError> {
        let mut tx = self.gateway.begin().await?;
        let found = self
            .gateway
            .update_in_place(&mut tx, id, move |entity| entity.overwrite(draft))
            .await?;

        // Nothing was written when the row is missing; dropping `tx` rolls back.
        if found {
            self.gateway.commit(tx).await?;
        }

        record_resource_operation(G::Entity::NAME, "update", found);
        tracing::debug!(resource = G::Entity::NAME, id, found, "Replace");
        Ok(Lookup::from(found))
    }

    /// Remove the entity with `id`.
    pub async fn remove(&self, id: i64) -> Result<Lookup<()>, StoreError> {
        let mut tx = self.gateway.begin().await?;
        let removed = self.gateway.delete_by_id(&mut tx, id).await?;
        self.gateway.commit(tx).await?;

        record_resource_operation(G::Entity::NAME, "delete", removed);
        tracing::debug!(resource = G::Entity::NAME, id, removed, "Remove");
        Ok(Lookup::from(removed))
    }
}
