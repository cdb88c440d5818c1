use crate::domains::core::{Criterion, LifecycleRepository, SchoolYearScoped, SqliteStore};
use crate::domains::event::types::Event;
use crate::errors::DomainResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait EventRepository: LifecycleRepository<Event> + SchoolYearScoped<Event> {
    async fn find_by_creator_id(&self, creator_id: Uuid) -> DomainResult<Vec<Event>>;
}

pub type SqliteEventRepository = SqliteStore<Event>;

#[async_trait]
impl EventRepository for SqliteStore<Event> {
    async fn find_by_creator_id(&self, creator_id: Uuid) -> DomainResult<Vec<Event>> {
        self.fetch_live(Some(Criterion::eq("created_by", creator_id))).await
    }
}
