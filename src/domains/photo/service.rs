use crate::domains::archive::{Archive, ArchiveRepository};
use crate::domains::core::{IntegrityChecks, LifecycleService, StatusRegistry};
use crate::domains::photo::repository::PhotoRepository;
use crate::domains::photo::types::{NewPhoto, Photo, UpdatePhoto};
use crate::domains::user::{User, UserRepository};
use crate::errors::ServiceResult;
use crate::validation::Validate;
use std::sync::Arc;
use uuid::Uuid;

pub struct PhotoService {
    lifecycle: LifecycleService<Photo, dyn PhotoRepository>,
    user_repo: Arc<dyn UserRepository>,
    archive_repo: Arc<dyn ArchiveRepository>,
}

impl PhotoService {
    pub fn new(
        photo_repo: Arc<dyn PhotoRepository>,
        user_repo: Arc<dyn UserRepository>,
        archive_repo: Arc<dyn ArchiveRepository>,
        statuses: StatusRegistry,
    ) -> Self {
        Self {
            lifecycle: LifecycleService::new(photo_repo, statuses),
            user_repo,
            archive_repo,
        }
    }

    pub async fn create_photo(&self, new_photo: NewPhoto) -> ServiceResult<Photo> {
        new_photo.validate()?;

        IntegrityChecks::new()
            .exists::<User, _>(&*self.user_repo, new_photo.created_by)
            .exists_if_present::<Archive, _>(&*self.archive_repo, new_photo.id_archive)
            .run()
            .await?;

        Ok(self.lifecycle.create(new_photo.into_photo()).await?)
    }

    pub async fn update_photo(&self, id: Uuid, update: UpdatePhoto) -> ServiceResult<Photo> {
        Ok(self.lifecycle.update(id, update).await?)
    }

    pub async fn delete_photo(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.soft_delete(id).await?)
    }

    pub async fn hard_delete_photo(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.hard_delete(id).await?)
    }

    pub async fn get_photo(&self, id: Uuid) -> ServiceResult<Photo> {
        Ok(self.lifecycle.get(id).await?)
    }

    pub async fn list_photos(&self) -> ServiceResult<Vec<Photo>> {
        Ok(self.lifecycle.list().await?)
    }

    pub async fn find_by_creator_id(&self, creator_id: Uuid) -> ServiceResult<Vec<Photo>> {
        Ok(self.lifecycle.repository().find_by_creator_id(creator_id).await?)
    }

    pub async fn list_by_school_year(&self, school_year_id: Uuid) -> ServiceResult<Vec<Photo>> {
        Ok(self.lifecycle.list_by_school_year(school_year_id).await?)
    }
}
