use crate::domains::archive::{Archive, ArchiveRepository};
use crate::domains::core::{IntegrityChecks, LifecycleService, StatusRegistry};
use crate::domains::format::repository::FormatRepository;
use crate::domains::format::types::{Format, NewFormat, UpdateFormat};
use crate::domains::user::{User, UserRepository};
use crate::errors::ServiceResult;
use crate::validation::Validate;
use std::sync::Arc;
use uuid::Uuid;

pub struct FormatService {
    lifecycle: LifecycleService<Format, dyn FormatRepository>,
    user_repo: Arc<dyn UserRepository>,
    archive_repo: Arc<dyn ArchiveRepository>,
}

impl FormatService {
    pub fn new(
        format_repo: Arc<dyn FormatRepository>,
        user_repo: Arc<dyn UserRepository>,
        archive_repo: Arc<dyn ArchiveRepository>,
        statuses: StatusRegistry,
    ) -> Self {
        Self {
            lifecycle: LifecycleService::new(format_repo, statuses),
            user_repo,
            archive_repo,
        }
    }

    pub async fn create_format(&self, new_format: NewFormat) -> ServiceResult<Format> {
        new_format.validate()?;

        IntegrityChecks::new()
            .exists::<User, _>(&*self.user_repo, new_format.created_by)
            .exists_if_present::<Archive, _>(&*self.archive_repo, new_format.id_archive)
            .run()
            .await?;

        Ok(self.lifecycle.create(new_format.into_format()).await?)
    }

    pub async fn update_format(&self, id: Uuid, update: UpdateFormat) -> ServiceResult<Format> {
        Ok(self.lifecycle.update(id, update).await?)
    }

    pub async fn delete_format(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.soft_delete(id).await?)
    }

    pub async fn hard_delete_format(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.hard_delete(id).await?)
    }

    pub async fn get_format(&self, id: Uuid) -> ServiceResult<Format> {
        Ok(self.lifecycle.get(id).await?)
    }

    pub async fn list_formats(&self) -> ServiceResult<Vec<Format>> {
        Ok(self.lifecycle.list().await?)
    }

    pub async fn find_by_creator_id(&self, creator_id: Uuid) -> ServiceResult<Vec<Format>> {
        Ok(self.lifecycle.repository().find_by_creator_id(creator_id).await?)
    }
}
