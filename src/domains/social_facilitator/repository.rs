use crate::domains::core::{Criterion, LifecycleRepository, SqliteStore};
use crate::domains::social_facilitator::types::SocialFacilitator;
use crate::errors::DomainResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait SocialFacilitatorRepository: LifecycleRepository<SocialFacilitator> {
    async fn find_by_user_id(&self, user_id: Uuid) -> DomainResult<Vec<SocialFacilitator>>;
    async fn find_by_region_id(&self, region_id: Uuid) -> DomainResult<Vec<SocialFacilitator>>;
    /// The facilitator a subproject points at, if it is live.
    async fn find_by_subproject_id(&self, subproject_id: Uuid) -> DomainResult<Vec<SocialFacilitator>>;
}

pub type SqliteSocialFacilitatorRepository = SqliteStore<SocialFacilitator>;

#[async_trait]
impl SocialFacilitatorRepository for SqliteStore<SocialFacilitator> {
    async fn find_by_user_id(&self, user_id: Uuid) -> DomainResult<Vec<SocialFacilitator>> {
        self.fetch_live(Some(Criterion::eq("id_user", user_id))).await
    }

    async fn find_by_region_id(&self, region_id: Uuid) -> DomainResult<Vec<SocialFacilitator>> {
        self.fetch_live(Some(Criterion::eq("id_region", region_id))).await
    }

    async fn find_by_subproject_id(&self, subproject_id: Uuid) -> DomainResult<Vec<SocialFacilitator>> {
        let criterion = Criterion::custom(
            "t.id IN (SELECT sp.id_social_facilitator FROM subprojects sp WHERE sp.id = ",
            subproject_id,
            ")",
        );
        self.fetch_live(Some(criterion)).await
    }
}
