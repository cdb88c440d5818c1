use crate::domains::coordinator::{Coordinator, CoordinatorRepository};
use crate::domains::core::{IntegrityChecks, LifecycleService, StatusRegistry};
use crate::domains::region::{Region, RegionRepository};
use crate::domains::social_facilitator::{SocialFacilitator, SocialFacilitatorRepository};
use crate::domains::subproject::repository::SubprojectRepository;
use crate::domains::subproject::types::{NewSubproject, Subproject, UpdateSubproject};
use crate::errors::ServiceResult;
use crate::validation::Validate;
use std::sync::Arc;
use uuid::Uuid;

pub struct SubprojectService {
    lifecycle: LifecycleService<Subproject, dyn SubprojectRepository>,
    region_repo: Arc<dyn RegionRepository>,
    facilitator_repo: Arc<dyn SocialFacilitatorRepository>,
    coordinator_repo: Arc<dyn CoordinatorRepository>,
}

impl SubprojectService {
    pub fn new(
        subproject_repo: Arc<dyn SubprojectRepository>,
        region_repo: Arc<dyn RegionRepository>,
        facilitator_repo: Arc<dyn SocialFacilitatorRepository>,
        coordinator_repo: Arc<dyn CoordinatorRepository>,
        statuses: StatusRegistry,
    ) -> Self {
        Self {
            lifecycle: LifecycleService::new(subproject_repo, statuses),
            region_repo,
            facilitator_repo,
            coordinator_repo,
        }
    }

    /// Each present reference must exist, checked region first, then
    /// facilitator, then coordinator. A coordinator may lead only one live
    /// subproject.
    pub async fn create_subproject(&self, new_subproject: NewSubproject) -> ServiceResult<Subproject> {
        new_subproject.validate()?;

        let mut checks = IntegrityChecks::new()
            .exists_if_present::<Region, _>(&*self.region_repo, new_subproject.id_region)
            .exists_if_present::<SocialFacilitator, _>(&*self.facilitator_repo, new_subproject.id_social_facilitator)
            .exists_if_present::<Coordinator, _>(&*self.coordinator_repo, new_subproject.id_coordinator);

        if let Some(id_coordinator) = new_subproject.id_coordinator {
            checks = checks.unique(
                self.lifecycle.repository().find_by_coordinator_id(id_coordinator),
                format!("Coordinator with ID {} is already assigned to another subproject", id_coordinator),
            );
        }
        checks.run().await?;

        Ok(self.lifecycle.create(new_subproject.into_subproject()).await?)
    }

    /// Optional references can be cleared. Reassigning a coordinator that
    /// already leads another live subproject is rejected by the store.
    pub async fn update_subproject(&self, id: Uuid, update: UpdateSubproject) -> ServiceResult<Subproject> {
        update.validate()?;
        Ok(self.lifecycle.update(id, update).await?)
    }

    pub async fn delete_subproject(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.soft_delete(id).await?)
    }

    pub async fn hard_delete_subproject(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.hard_delete(id).await?)
    }

    pub async fn get_subproject(&self, id: Uuid) -> ServiceResult<Subproject> {
        Ok(self.lifecycle.get(id).await?)
    }

    pub async fn list_subprojects(&self) -> ServiceResult<Vec<Subproject>> {
        Ok(self.lifecycle.list().await?)
    }

    pub async fn find_by_region_id(&self, region_id: Uuid) -> ServiceResult<Vec<Subproject>> {
        Ok(self.lifecycle.repository().find_by_region_id(region_id).await?)
    }

    pub async fn find_by_coordinator_id(&self, coordinator_id: Uuid) -> ServiceResult<Vec<Subproject>> {
        Ok(self.lifecycle.repository().find_by_coordinator_id(coordinator_id).await?)
    }

    pub async fn find_by_social_facilitator_id(&self, facilitator_id: Uuid) -> ServiceResult<Vec<Subproject>> {
        Ok(self.lifecycle.repository().find_by_social_facilitator_id(facilitator_id).await?)
    }

    pub async fn find_by_name_contains(&self, fragment: &str) -> ServiceResult<Vec<Subproject>> {
        Ok(self.lifecycle.repository().find_by_name_contains(fragment.trim()).await?)
    }
}
