use crate::domains::coordinator::types::Coordinator;
use crate::domains::core::{Criterion, LifecycleRepository, SqliteStore};
use crate::errors::DomainResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait CoordinatorRepository: LifecycleRepository<Coordinator> {
    async fn find_by_user_id(&self, user_id: Uuid) -> DomainResult<Vec<Coordinator>>;
    async fn find_by_region_id(&self, region_id: Uuid) -> DomainResult<Vec<Coordinator>>;
}

pub type SqliteCoordinatorRepository = SqliteStore<Coordinator>;

#[async_trait]
impl CoordinatorRepository for SqliteStore<Coordinator> {
    async fn find_by_user_id(&self, user_id: Uuid) -> DomainResult<Vec<Coordinator>> {
        self.fetch_live(Some(Criterion::eq("id_user", user_id))).await
    }

    async fn find_by_region_id(&self, region_id: Uuid) -> DomainResult<Vec<Coordinator>> {
        self.fetch_live(Some(Criterion::eq("id_region", region_id))).await
    }
}
