//! Storage gateway contract.
//!
//! One gateway instance exists per resource kind. The gateway is the only
//! component allowed to assign identifiers; services and handlers never
//! synthesize or guess ids.

use async_trait::async_trait;

use crate::shared::error::StoreError;

/// A resource kind managed through a storage gateway.
pub trait Resource: Clone + Send + Sync + 'static {
    /// The resource's fields without an identity.
    type Draft: Send + 'static;

    /// Human-readable kind, used in messages and metric labels.
    const NAME: &'static str;

    fn id(&self) -> i64;

    /// Build a persisted entity from a store-assigned id.
    ///
    /// Only storage gateways call this.
    fn assemble(id: i64, draft: Self::Draft) -> Self;

    /// Copy every mutable field from `draft`, absent optional fields included.
    fn overwrite(&mut self, draft: Self::Draft);
}

/// Outcome of an existence-checked operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound => Lookup::NotFound,
        }
    }

    /// Convert into a `Result`, raising `err()` when nothing was found.
    pub fn found_or_else<E>(self, err: impl FnOnce() -> E) -> Result<T, E> {
        match self {
            Lookup::Found(value) => Ok(value),
            Lookup::NotFound => Err(err()),
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::NotFound,
        }
    }
}

impl From<bool> for Lookup<()> {
    fn from(found: bool) -> Self {
        if found {
            Lookup::Found(())
        } else {
            Lookup::NotFound
        }
    }
}

/// Persistence adapter for one resource kind.
///
/// Mutating operations run inside a transaction opened by the caller with
/// [`StorageGateway::begin`]. Nothing written through a transaction is visible
/// to other callers before [`StorageGateway::commit`]; dropping the
/// transaction instead rolls it back.
#[async_trait]
pub trait StorageGateway: Send + Sync + 'static {
    type Entity: Resource;

    /// An open transaction scope.
    type Tx: Send;

    async fn begin(&self) -> Result<Self::Tx, StoreError>;

    async fn commit(&self, tx: Self::Tx) -> Result<(), StoreError>;

    /// Every persisted row, in store-defined order.
    async fn load_all(&self) -> Result<Vec<Self::Entity>, StoreError>;

    /// The row matching `id`. A missing row is `Ok(None)`, never an error.
    async fn load_by_id(&self, id: i64) -> Result<Option<Self::Entity>, StoreError>;

    /// Persist a new row and return it with its assigned id.
    async fn insert(
        &self,
        tx: &mut Self::Tx,
        draft: <Self::Entity as Resource>::Draft,
    ) -> Result<Self::Entity, StoreError>;

    /// Apply `mutate` to the row matching `id` and write it back.
    ///
    /// Returns `false` without writing anything when no row matches.
    async fn update_in_place<F>(
        &self,
        tx: &mut Self::Tx,
        id: i64,
        mutate: F,
    ) -> Result<bool, StoreError>
    where
        F: FnOnce(&mut Self::Entity) + Send + 'static;

    /// Remove the row matching `id`, returning whether one was removed.
    async fn delete_by_id(&self, tx: &mut Self::Tx, id: i64) -> Result<bool, StoreError>;
}
