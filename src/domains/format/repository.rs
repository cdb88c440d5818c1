use crate::domains::core::{Criterion, LifecycleRepository, SqliteStore};
use crate::domains::format::types::Format;
use crate::errors::DomainResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait FormatRepository: LifecycleRepository<Format> {
    async fn find_by_creator_id(&self, creator_id: Uuid) -> DomainResult<Vec<Format>>;
}

pub type SqliteFormatRepository = SqliteStore<Format>;

#[async_trait]
impl FormatRepository for SqliteStore<Format> {
    async fn find_by_creator_id(&self, creator_id: Uuid) -> DomainResult<Vec<Format>> {
        self.fetch_live(Some(Criterion::eq("created_by", creator_id))).await
    }
}
