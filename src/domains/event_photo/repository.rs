use crate::domains::core::{Criterion, LifecycleRepository, SqliteStore};
use crate::domains::event_photo::types::EventPhoto;
use crate::errors::DomainResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait EventPhotoRepository: LifecycleRepository<EventPhoto> {
    async fn find_by_event_id(&self, event_id: Uuid) -> DomainResult<Vec<EventPhoto>>;
    async fn find_by_photo_id(&self, photo_id: Uuid) -> DomainResult<Vec<EventPhoto>>;
}

pub type SqliteEventPhotoRepository = SqliteStore<EventPhoto>;

#[async_trait]
impl EventPhotoRepository for SqliteStore<EventPhoto> {
    async fn find_by_event_id(&self, event_id: Uuid) -> DomainResult<Vec<EventPhoto>> {
        self.fetch_live(Some(Criterion::eq("id_event", event_id))).await
    }

    async fn find_by_photo_id(&self, photo_id: Uuid) -> DomainResult<Vec<EventPhoto>> {
        self.fetch_live(Some(Criterion::eq("id_photo", photo_id))).await
    }
}
