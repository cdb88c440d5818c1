use crate::domains::core::{Criterion, LifecycleRepository, SchoolYearScoped, SqliteStore};
use crate::domains::success_story::types::SuccessStory;
use crate::errors::DomainResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait SuccessStoryRepository:
    LifecycleRepository<SuccessStory> + SchoolYearScoped<SuccessStory>
{
    async fn find_by_creator_id(&self, creator_id: Uuid) -> DomainResult<Vec<SuccessStory>>;
}

pub type SqliteSuccessStoryRepository = SqliteStore<SuccessStory>;

#[async_trait]
impl SuccessStoryRepository for SqliteStore<SuccessStory> {
    async fn find_by_creator_id(&self, creator_id: Uuid) -> DomainResult<Vec<SuccessStory>> {
        self.fetch_live(Some(Criterion::eq("created_by", creator_id))).await
    }
}
