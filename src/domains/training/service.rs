use crate::domains::archive::{Archive, ArchiveRepository};
use crate::domains::core::{IntegrityChecks, LifecycleService, StatusRegistry};
use crate::domains::training::repository::TrainingRepository;
use crate::domains::training::types::{Training, NewTraining, UpdateTraining};
use crate::domains::user::{User, UserRepository};
use crate::errors::ServiceResult;
use crate::validation::Validate;
use std::sync::Arc;
use uuid::Uuid;

pub struct TrainingService {
    lifecycle: LifecycleService<Training, dyn TrainingRepository>,
    user_repo: Arc<dyn UserRepository>,
    archive_repo: Arc<dyn ArchiveRepository>,
}

impl TrainingService {
    pub fn new(
        training_repo: Arc<dyn TrainingRepository>,
        user_repo: Arc<dyn UserRepository>,
        archive_repo: Arc<dyn ArchiveRepository>,
        statuses: StatusRegistry,
    ) -> Self {
        Self {
            lifecycle: LifecycleService::new(training_repo, statuses),
            user_repo,
            archive_repo,
        }
    }

    pub async fn create_training(&self, new_training: NewTraining) -> ServiceResult<Training> {
        new_training.validate()?;

        IntegrityChecks::new()
            .exists::<User, _>(&*self.user_repo, new_training.created_by)
            .exists_if_present::<Archive, _>(&*self.archive_repo, new_training.id_archive)
            .run()
            .await?;

        Ok(self.lifecycle.create(new_training.into_training()).await?)
    }

    pub async fn update_training(&self, id: Uuid, update: UpdateTraining) -> ServiceResult<Training> {
        Ok(self.lifecycle.update(id, update).await?)
    }

    pub async fn delete_training(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.soft_delete(id).await?)
    }

    pub async fn hard_delete_training(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.hard_delete(id).await?)
    }

    pub async fn get_training(&self, id: Uuid) -> ServiceResult<Training> {
        Ok(self.lifecycle.get(id).await?)
    }

    pub async fn list_trainings(&self) -> ServiceResult<Vec<Training>> {
        Ok(self.lifecycle.list().await?)
    }

    pub async fn find_by_creator_id(&self, creator_id: Uuid) -> ServiceResult<Vec<Training>> {
        Ok(self.lifecycle.repository().find_by_creator_id(creator_id).await?)
    }
}
