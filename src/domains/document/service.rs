use crate::domains::core::{LifecycleService, StatusRegistry};
use crate::domains::document::repository::DocumentRepository;
use crate::domains::document::types::{Document, NewDocument, UpdateDocument};
use crate::errors::ServiceResult;
use crate::validation::Validate;
use std::sync::Arc;
use uuid::Uuid;

pub struct DocumentService {
    lifecycle: LifecycleService<Document, dyn DocumentRepository>,
}

impl DocumentService {
    pub fn new(document_repo: Arc<dyn DocumentRepository>, statuses: StatusRegistry) -> Self {
        Self {
            lifecycle: LifecycleService::new(document_repo, statuses),
        }
    }

    /// Intern and archive references are optional and not looked up first.
    /// A dangling one is refused by the store's foreign keys.
    pub async fn create_document(&self, new_document: NewDocument) -> ServiceResult<Document> {
        new_document.validate()?;
        Ok(self.lifecycle.create(new_document.into_document()).await?)
    }

    pub async fn update_document(&self, id: Uuid, update: UpdateDocument) -> ServiceResult<Document> {
        Ok(self.lifecycle.update(id, update).await?)
    }

    pub async fn delete_document(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.soft_delete(id).await?)
    }

    pub async fn hard_delete_document(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.hard_delete(id).await?)
    }

    pub async fn get_document(&self, id: Uuid) -> ServiceResult<Document> {
        Ok(self.lifecycle.get(id).await?)
    }

    pub async fn list_documents(&self) -> ServiceResult<Vec<Document>> {
        Ok(self.lifecycle.list().await?)
    }

    pub async fn find_by_intern_id(&self, intern_id: Uuid) -> ServiceResult<Vec<Document>> {
        Ok(self.lifecycle.repository().find_by_intern_id(intern_id).await?)
    }

    pub async fn list_by_school_year(&self, school_year_id: Uuid) -> ServiceResult<Vec<Document>> {
        Ok(self.lifecycle.list_by_school_year(school_year_id).await?)
    }
}
