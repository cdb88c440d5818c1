use crate::domains::core::{Criterion, LifecycleRepository, SqliteStore};
use crate::domains::training::types::Training;
use crate::errors::DomainResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait TrainingRepository: LifecycleRepository<Training> {
    async fn find_by_creator_id(&self, creator_id: Uuid) -> DomainResult<Vec<Training>>;
}

pub type SqliteTrainingRepository = SqliteStore<Training>;

#[async_trait]
impl TrainingRepository for SqliteStore<Training> {
    async fn find_by_creator_id(&self, creator_id: Uuid) -> DomainResult<Vec<Training>> {
        self.fetch_live(Some(Criterion::eq("created_by", creator_id))).await
    }
}
