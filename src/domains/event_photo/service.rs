use crate::domains::core::{IntegrityChecks, LifecycleService, StatusRegistry};
use crate::domains::event::{Event, EventRepository};
use crate::domains::event_photo::repository::EventPhotoRepository;
use crate::domains::event_photo::types::{EventPhoto, NewEventPhoto, UpdateEventPhoto};
use crate::domains::photo::{Photo, PhotoRepository};
use crate::errors::ServiceResult;
use std::sync::Arc;
use uuid::Uuid;

pub struct EventPhotoService {
    lifecycle: LifecycleService<EventPhoto, dyn EventPhotoRepository>,
    event_repo: Arc<dyn EventRepository>,
    photo_repo: Arc<dyn PhotoRepository>,
}

impl EventPhotoService {
    pub fn new(
        event_photo_repo: Arc<dyn EventPhotoRepository>,
        event_repo: Arc<dyn EventRepository>,
        photo_repo: Arc<dyn PhotoRepository>,
        statuses: StatusRegistry,
    ) -> Self {
        Self {
            lifecycle: LifecycleService::new(event_photo_repo, statuses),
            event_repo,
            photo_repo,
        }
    }

    pub async fn create_event_photo(&self, new_link: NewEventPhoto) -> ServiceResult<EventPhoto> {
        IntegrityChecks::new()
            .exists::<Event, _>(&*self.event_repo, new_link.id_event)
            .exists::<Photo, _>(&*self.photo_repo, new_link.id_photo)
            .run()
            .await?;

        Ok(self.lifecycle.create(new_link.into_event_photo()).await?)
    }

    pub async fn update_event_photo(&self, id: Uuid, update: UpdateEventPhoto) -> ServiceResult<EventPhoto> {
        Ok(self.lifecycle.update(id, update).await?)
    }

    pub async fn delete_event_photo(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.soft_delete(id).await?)
    }

    pub async fn hard_delete_event_photo(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.hard_delete(id).await?)
    }

    pub async fn get_event_photo(&self, id: Uuid) -> ServiceResult<EventPhoto> {
        Ok(self.lifecycle.get(id).await?)
    }

    pub async fn list_event_photos(&self) -> ServiceResult<Vec<EventPhoto>> {
        Ok(self.lifecycle.list().await?)
    }

    pub async fn find_by_event_id(&self, event_id: Uuid) -> ServiceResult<Vec<EventPhoto>> {
        Ok(self.lifecycle.repository().find_by_event_id(event_id).await?)
    }

    pub async fn find_by_photo_id(&self, photo_id: Uuid) -> ServiceResult<Vec<EventPhoto>> {
        Ok(self.lifecycle.repository().find_by_photo_id(photo_id).await?)
    }
}
