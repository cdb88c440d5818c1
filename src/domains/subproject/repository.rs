use crate::domains::core::{Criterion, LifecycleRepository, SqliteStore};
use crate::domains::subproject::types::Subproject;
use crate::errors::DomainResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait SubprojectRepository: LifecycleRepository<Subproject> {
    async fn find_by_region_id(&self, region_id: Uuid) -> DomainResult<Vec<Subproject>>;
    async fn find_by_coordinator_id(&self, coordinator_id: Uuid) -> DomainResult<Vec<Subproject>>;
    async fn find_by_social_facilitator_id(&self, facilitator_id: Uuid) -> DomainResult<Vec<Subproject>>;
    /// Live subprojects whose name contains `fragment` (ASCII case-insensitive).
    async fn find_by_name_contains(&self, fragment: &str) -> DomainResult<Vec<Subproject>>;
}

pub type SqliteSubprojectRepository = SqliteStore<Subproject>;

#[async_trait]
impl SubprojectRepository for SqliteStore<Subproject> {
    async fn find_by_region_id(&self, region_id: Uuid) -> DomainResult<Vec<Subproject>> {
        self.fetch_live(Some(Criterion::eq("id_region", region_id))).await
    }

    async fn find_by_coordinator_id(&self, coordinator_id: Uuid) -> DomainResult<Vec<Subproject>> {
        self.fetch_live(Some(Criterion::eq("id_coordinator", coordinator_id))).await
    }

    async fn find_by_social_facilitator_id(&self, facilitator_id: Uuid) -> DomainResult<Vec<Subproject>> {
        self.fetch_live(Some(Criterion::eq("id_social_facilitator", facilitator_id))).await
    }

    async fn find_by_name_contains(&self, fragment: &str) -> DomainResult<Vec<Subproject>> {
        // Wildcards in the fragment match literally.
        let escaped = fragment.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
        let criterion = Criterion::custom(
            "t.name_subproject LIKE '%' || ",
            escaped,
            " || '%' ESCAPE '\\'",
        );
        self.fetch_live(Some(criterion)).await
    }
}
