use crate::domains::core::{IntegrityChecks, LifecycleService, StatusRegistry};
use crate::domains::region::repository::RegionRepository;
use crate::domains::region::types::{NewRegion, Region, UpdateRegion};
use crate::errors::ServiceResult;
use crate::validation::Validate;
use std::sync::Arc;
use uuid::Uuid;

pub struct RegionService {
    lifecycle: LifecycleService<Region, dyn RegionRepository>,
}

impl RegionService {
    pub fn new(region_repo: Arc<dyn RegionRepository>, statuses: StatusRegistry) -> Self {
        Self {
            lifecycle: LifecycleService::new(region_repo, statuses),
        }
    }

    /// Create a region. A live region with the same name is a conflict.
    pub async fn create_region(&self, new_region: NewRegion) -> ServiceResult<Region> {
        new_region.validate()?;
        let region = new_region.into_region();

        let repo = self.lifecycle.repository();
        IntegrityChecks::new()
            .unique(
                repo.find_by_name(&region.name_region),
                format!("Region with name {} already exists", region.name_region),
            )
            .run()
            .await?;

        Ok(self.lifecycle.create(region).await?)
    }

    /// Renames are not checked against other regions.
    pub async fn update_region(&self, id: Uuid, update: UpdateRegion) -> ServiceResult<Region> {
        update.validate()?;
        Ok(self.lifecycle.update(id, update).await?)
    }

    pub async fn delete_region(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.soft_delete(id).await?)
    }

    pub async fn hard_delete_region(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.hard_delete(id).await?)
    }

    pub async fn get_region(&self, id: Uuid) -> ServiceResult<Region> {
        Ok(self.lifecycle.get(id).await?)
    }

    pub async fn list_regions(&self) -> ServiceResult<Vec<Region>> {
        Ok(self.lifecycle.list().await?)
    }

    pub async fn find_regions_by_name(&self, name: &str) -> ServiceResult<Vec<Region>> {
        Ok(self.lifecycle.repository().find_by_name(name.trim()).await?)
    }
}
