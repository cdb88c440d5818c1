use crate::domains::archive::repository::ArchiveRepository;
use crate::domains::archive::types::{Archive, NewArchive, UpdateArchive};
use crate::domains::core::{IntegrityChecks, LifecycleService, StatusRegistry};
use crate::domains::user::{User, UserRepository};
use crate::errors::ServiceResult;
use crate::validation::Validate;
use std::sync::Arc;
use uuid::Uuid;

pub struct ArchiveService {
    lifecycle: LifecycleService<Archive, dyn ArchiveRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl ArchiveService {
    pub fn new(
        archive_repo: Arc<dyn ArchiveRepository>,
        user_repo: Arc<dyn UserRepository>,
        statuses: StatusRegistry,
    ) -> Self {
        Self {
            lifecycle: LifecycleService::new(archive_repo, statuses),
            user_repo,
        }
    }

    pub async fn create_archive(&self, new_archive: NewArchive) -> ServiceResult<Archive> {
        new_archive.validate()?;

        IntegrityChecks::new()
            .exists::<User, _>(&*self.user_repo, new_archive.uploaded_by)
            .run()
            .await?;

        Ok(self.lifecycle.create(new_archive.into_archive()).await?)
    }

    pub async fn update_archive(&self, id: Uuid, update: UpdateArchive) -> ServiceResult<Archive> {
        Ok(self.lifecycle.update(id, update).await?)
    }

    pub async fn delete_archive(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.soft_delete(id).await?)
    }

    pub async fn hard_delete_archive(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.hard_delete(id).await?)
    }

    pub async fn get_archive(&self, id: Uuid) -> ServiceResult<Archive> {
        Ok(self.lifecycle.get(id).await?)
    }

    pub async fn list_archives(&self) -> ServiceResult<Vec<Archive>> {
        Ok(self.lifecycle.list().await?)
    }

    pub async fn find_by_uploader_user_id(&self, user_id: Uuid) -> ServiceResult<Vec<Archive>> {
        Ok(self.lifecycle.repository().find_by_uploader_user_id(user_id).await?)
    }

    pub async fn find_by_file_type(&self, file_type: &str) -> ServiceResult<Vec<Archive>> {
        Ok(self.lifecycle.repository().find_by_file_type(file_type).await?)
    }

    pub async fn list_by_school_year(&self, school_year_id: Uuid) -> ServiceResult<Vec<Archive>> {
        Ok(self.lifecycle.list_by_school_year(school_year_id).await?)
    }
}
