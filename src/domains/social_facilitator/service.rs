use crate::domains::core::{IntegrityChecks, LifecycleService, StatusRegistry};
use crate::domains::region::{Region, RegionRepository};
use crate::domains::social_facilitator::repository::SocialFacilitatorRepository;
use crate::domains::social_facilitator::types::{
    NewSocialFacilitator, SocialFacilitator, UpdateSocialFacilitator,
};
use crate::domains::user::{User, UserRepository};
use crate::errors::ServiceResult;
use std::sync::Arc;
use uuid::Uuid;

pub struct SocialFacilitatorService {
    lifecycle: LifecycleService<SocialFacilitator, dyn SocialFacilitatorRepository>,
    user_repo: Arc<dyn UserRepository>,
    region_repo: Arc<dyn RegionRepository>,
}

impl SocialFacilitatorService {
    pub fn new(
        facilitator_repo: Arc<dyn SocialFacilitatorRepository>,
        user_repo: Arc<dyn UserRepository>,
        region_repo: Arc<dyn RegionRepository>,
        statuses: StatusRegistry,
    ) -> Self {
        Self {
            lifecycle: LifecycleService::new(facilitator_repo, statuses),
            user_repo,
            region_repo,
        }
    }

    pub async fn create_social_facilitator(
        &self,
        new_facilitator: NewSocialFacilitator,
    ) -> ServiceResult<SocialFacilitator> {
        let id_user = new_facilitator.id_user;

        IntegrityChecks::new()
            .exists::<User, _>(&*self.user_repo, id_user)
            .exists::<Region, _>(&*self.region_repo, new_facilitator.id_region)
            .unique(
                self.lifecycle.repository().find_by_user_id(id_user),
                format!("User with ID {} is already a social facilitator", id_user),
            )
            .run()
            .await?;

        Ok(self.lifecycle.create(new_facilitator.into_social_facilitator()).await?)
    }

    pub async fn update_social_facilitator(
        &self,
        id: Uuid,
        update: UpdateSocialFacilitator,
    ) -> ServiceResult<SocialFacilitator> {
        Ok(self.lifecycle.update(id, update).await?)
    }

    pub async fn delete_social_facilitator(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.soft_delete(id).await?)
    }

    pub async fn hard_delete_social_facilitator(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.hard_delete(id).await?)
    }

    pub async fn get_social_facilitator(&self, id: Uuid) -> ServiceResult<SocialFacilitator> {
        Ok(self.lifecycle.get(id).await?)
    }

    pub async fn list_social_facilitators(&self) -> ServiceResult<Vec<SocialFacilitator>> {
        Ok(self.lifecycle.list().await?)
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> ServiceResult<Vec<SocialFacilitator>> {
        Ok(self.lifecycle.repository().find_by_user_id(user_id).await?)
    }

    pub async fn find_by_region_id(&self, region_id: Uuid) -> ServiceResult<Vec<SocialFacilitator>> {
        Ok(self.lifecycle.repository().find_by_region_id(region_id).await?)
    }

    pub async fn find_by_subproject_id(&self, subproject_id: Uuid) -> ServiceResult<Vec<SocialFacilitator>> {
        Ok(self.lifecycle.repository().find_by_subproject_id(subproject_id).await?)
    }
}
