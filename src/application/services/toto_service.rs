//! Toto Service
//!
//! Fail-soft resource contract working in the `TotoDto` representation:
//! absence is a normal return value (`None` / `false`), never an error.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::resource_service::ResourceService;
use crate::domain::{StorageGateway, Toto, TotoDraft};
use crate::shared::error::StoreError;

/// Toto service trait
#[async_trait]
pub trait TotoService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<TotoDto>, StoreError>;

    /// `None` when no toto has this id.
    async fn get_by_id(&self, id: i64) -> Result<Option<TotoDto>, StoreError>;

    /// Persist a toto and return it with its assigned id.
    async fn create(&self, dto: TotoDto) -> Result<TotoDto, StoreError>;

    /// `true` if a toto was found and overwritten.
    async fn update(&self, id: i64, dto: TotoDto) -> Result<bool, StoreError>;

    /// `true` if a toto was removed.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}

/// Toto representation, both request and response body.
///
/// `id` is ignored on input; the store assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TotoDto {
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: String,
}

impl TotoDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    fn into_draft(self) -> TotoDraft {
        TotoDraft { name: self.name }
    }
}

impl From<Toto> for TotoDto {
    fn from(toto: Toto) -> Self {
        Self {
            id: Some(toto.id),
            name: toto.name,
        }
    }
}

/// TotoService implementation
pub struct TotoServiceImpl<G>
where
    G: StorageGateway<Entity = Toto>,
{
    resources: ResourceService<G>,
}

impl<G> TotoServiceImpl<G>
where
    G: StorageGateway<Entity = Toto>,
{
    pub fn new(toto_repo: Arc<G>) -> Self {
        Self {
            resources: ResourceService::new(toto_repo),
        }
    }
}

#[async_trait]
impl<G> TotoService for TotoServiceImpl<G>
where
    G: StorageGateway<Entity = Toto>,
{
    async fn get_all(&self) -> Result<Vec<TotoDto>, StoreError> {
        let totos = self.resources.list().await?;
        Ok(totos.into_iter().map(TotoDto::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<TotoDto>, StoreError> {
        Ok(self.resources.find(id).await?.map(TotoDto::from).into_option())
    }

    async fn create(&self, dto: TotoDto) -> Result<TotoDto, StoreError> {
        let created = self.resources.create(dto.into_draft()).await?;
        Ok(TotoDto::from(created))
    }

    async fn update(&self, id: i64, dto: TotoDto) -> Result<bool, StoreError> {
        Ok(self.resources.replace(id, dto.into_draft()).await?.is_found())
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.resources.remove(id).await?.is_found())
    }
}
