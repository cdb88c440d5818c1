use crate::domains::core::{Criterion, LifecycleRepository, SchoolYearScoped, SqliteStore};
use crate::domains::photo::types::Photo;
use crate::errors::DomainResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait PhotoRepository: LifecycleRepository<Photo> + SchoolYearScoped<Photo> {
    async fn find_by_creator_id(&self, creator_id: Uuid) -> DomainResult<Vec<Photo>>;
}

pub type SqlitePhotoRepository = SqliteStore<Photo>;

#[async_trait]
impl PhotoRepository for SqliteStore<Photo> {
    async fn find_by_creator_id(&self, creator_id: Uuid) -> DomainResult<Vec<Photo>> {
        self.fetch_live(Some(Criterion::eq("created_by", creator_id))).await
    }
}
