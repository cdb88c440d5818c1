use crate::domains::core::{IntegrityChecks, LifecycleService, StatusRegistry};
use crate::domains::event::repository::EventRepository;
use crate::domains::event::types::{Event, NewEvent, UpdateEvent};
use crate::domains::user::{User, UserRepository};
use crate::errors::ServiceResult;
use crate::validation::Validate;
use std::sync::Arc;
use uuid::Uuid;

pub struct EventService {
    lifecycle: LifecycleService<Event, dyn EventRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl EventService {
    pub fn new(
        event_repo: Arc<dyn EventRepository>,
        user_repo: Arc<dyn UserRepository>,
        statuses: StatusRegistry,
    ) -> Self {
        Self {
            lifecycle: LifecycleService::new(event_repo, statuses),
            user_repo,
        }
    }

    pub async fn create_event(&self, new_event: NewEvent) -> ServiceResult<Event> {
        new_event.validate()?;

        IntegrityChecks::new()
            .exists::<User, _>(&*self.user_repo, new_event.created_by)
            .run()
            .await?;

        Ok(self.lifecycle.create(new_event.into_event()).await?)
    }

    pub async fn update_event(&self, id: Uuid, update: UpdateEvent) -> ServiceResult<Event> {
        Ok(self.lifecycle.update(id, update).await?)
    }

    pub async fn delete_event(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.soft_delete(id).await?)
    }

    pub async fn hard_delete_event(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.hard_delete(id).await?)
    }

    pub async fn get_event(&self, id: Uuid) -> ServiceResult<Event> {
        Ok(self.lifecycle.get(id).await?)
    }

    pub async fn list_events(&self) -> ServiceResult<Vec<Event>> {
        Ok(self.lifecycle.list().await?)
    }

    pub async fn find_by_creator_id(&self, creator_id: Uuid) -> ServiceResult<Vec<Event>> {
        Ok(self.lifecycle.repository().find_by_creator_id(creator_id).await?)
    }

    pub async fn list_by_school_year(&self, school_year_id: Uuid) -> ServiceResult<Vec<Event>> {
        Ok(self.lifecycle.list_by_school_year(school_year_id).await?)
    }
}
