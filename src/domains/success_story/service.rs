use crate::domains::core::{IntegrityChecks, LifecycleService, StatusRegistry};
use crate::domains::photo::{Photo, PhotoRepository};
use crate::domains::success_story::repository::SuccessStoryRepository;
use crate::domains::success_story::types::{NewSuccessStory, SuccessStory, UpdateSuccessStory};
use crate::domains::user::{User, UserRepository};
use crate::errors::ServiceResult;
use crate::validation::Validate;
use std::sync::Arc;
use uuid::Uuid;

pub struct SuccessStoryService {
    lifecycle: LifecycleService<SuccessStory, dyn SuccessStoryRepository>,
    user_repo: Arc<dyn UserRepository>,
    photo_repo: Arc<dyn PhotoRepository>,
}

impl SuccessStoryService {
    pub fn new(
        story_repo: Arc<dyn SuccessStoryRepository>,
        user_repo: Arc<dyn UserRepository>,
        photo_repo: Arc<dyn PhotoRepository>,
        statuses: StatusRegistry,
    ) -> Self {
        Self {
            lifecycle: LifecycleService::new(story_repo, statuses),
            user_repo,
            photo_repo,
        }
    }

    pub async fn create_success_story(
        &self,
        new_story: NewSuccessStory,
    ) -> ServiceResult<SuccessStory> {
        new_story.validate()?;

        IntegrityChecks::new()
            .exists::<User, _>(&*self.user_repo, new_story.created_by)
            .exists_if_present::<Photo, _>(&*self.photo_repo, new_story.id_photo)
            .run()
            .await?;

        Ok(self.lifecycle.create(new_story.into_success_story()).await?)
    }

    pub async fn update_success_story(
        &self,
        id: Uuid,
        update: UpdateSuccessStory,
    ) -> ServiceResult<SuccessStory> {
        Ok(self.lifecycle.update(id, update).await?)
    }

    pub async fn delete_success_story(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.soft_delete(id).await?)
    }

    pub async fn hard_delete_success_story(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.hard_delete(id).await?)
    }

    pub async fn get_success_story(&self, id: Uuid) -> ServiceResult<SuccessStory> {
        Ok(self.lifecycle.get(id).await?)
    }

    pub async fn list_success_stories(&self) -> ServiceResult<Vec<SuccessStory>> {
        Ok(self.lifecycle.list().await?)
    }

    pub async fn find_by_creator_id(&self, creator_id: Uuid) -> ServiceResult<Vec<SuccessStory>> {
        Ok(self.lifecycle.repository().find_by_creator_id(creator_id).await?)
    }

    pub async fn list_by_school_year(
        &self,
        school_year_id: Uuid,
    ) -> ServiceResult<Vec<SuccessStory>> {
        Ok(self.lifecycle.list_by_school_year(school_year_id).await?)
    }
}
