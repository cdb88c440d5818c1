use crate::domains::archive::types::Archive;
use crate::domains::core::{Criterion, LifecycleRepository, SchoolYearScoped, SqliteStore};
use crate::errors::DomainResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait ArchiveRepository: LifecycleRepository<Archive> + SchoolYearScoped<Archive> {
    async fn find_by_uploader_user_id(&self, user_id: Uuid) -> DomainResult<Vec<Archive>>;
    async fn find_by_file_type(&self, file_type: &str) -> DomainResult<Vec<Archive>>;
}

pub type SqliteArchiveRepository = SqliteStore<Archive>;

#[async_trait]
impl ArchiveRepository for SqliteStore<Archive> {
    async fn find_by_uploader_user_id(&self, user_id: Uuid) -> DomainResult<Vec<Archive>> {
        self.fetch_live(Some(Criterion::eq("uploaded_by", user_id))).await
    }

    async fn find_by_file_type(&self, file_type: &str) -> DomainResult<Vec<Archive>> {
        self.fetch_live(Some(Criterion::eq("file_type", file_type))).await
    }
}
