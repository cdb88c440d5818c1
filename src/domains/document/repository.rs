use crate::domains::core::{Criterion, LifecycleRepository, SchoolYearScoped, SqliteStore};
use crate::domains::document::types::Document;
use crate::errors::DomainResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait DocumentRepository: LifecycleRepository<Document> + SchoolYearScoped<Document> {
    async fn find_by_intern_id(&self, intern_id: Uuid) -> DomainResult<Vec<Document>>;
}

pub type SqliteDocumentRepository = SqliteStore<Document>;

#[async_trait]
impl DocumentRepository for SqliteStore<Document> {
    async fn find_by_intern_id(&self, intern_id: Uuid) -> DomainResult<Vec<Document>> {
        self.fetch_live(Some(Criterion::eq("id_intern", intern_id))).await
    }
}
