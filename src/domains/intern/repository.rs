use crate::domains::core::{Criterion, LifecycleRepository, SchoolYearScoped, SqliteStore};
use crate::domains::intern::types::Intern;
use crate::errors::DomainResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait InternRepository: LifecycleRepository<Intern> + SchoolYearScoped<Intern> {
    async fn find_by_user_id(&self, user_id: Uuid) -> DomainResult<Vec<Intern>>;
    async fn find_by_social_facilitator_id(&self, facilitator_id: Uuid) -> DomainResult<Vec<Intern>>;
    async fn find_by_subproject_id(&self, subproject_id: Uuid) -> DomainResult<Vec<Intern>>;
}

pub type SqliteInternRepository = SqliteStore<Intern>;

#[async_trait]
impl InternRepository for SqliteStore<Intern> {
    async fn find_by_user_id(&self, user_id: Uuid) -> DomainResult<Vec<Intern>> {
        self.fetch_live(Some(Criterion::eq("id_user", user_id))).await
    }

    async fn find_by_social_facilitator_id(&self, facilitator_id: Uuid) -> DomainResult<Vec<Intern>> {
        self.fetch_live(Some(Criterion::eq("id_social_facilitator", facilitator_id))).await
    }

    async fn find_by_subproject_id(&self, subproject_id: Uuid) -> DomainResult<Vec<Intern>> {
        self.fetch_live(Some(Criterion::eq("id_subproject", subproject_id))).await
    }
}
