use crate::domains::coordinator::repository::CoordinatorRepository;
use crate::domains::coordinator::types::{Coordinator, NewCoordinator, UpdateCoordinator};
use crate::domains::core::{IntegrityChecks, LifecycleService, StatusRegistry};
use crate::domains::region::{Region, RegionRepository};
use crate::domains::user::{User, UserRepository};
use crate::errors::ServiceResult;
use std::sync::Arc;
use uuid::Uuid;

pub struct CoordinatorService {
    lifecycle: LifecycleService<Coordinator, dyn CoordinatorRepository>,
    user_repo: Arc<dyn UserRepository>,
    region_repo: Arc<dyn RegionRepository>,
}

impl CoordinatorService {
    pub fn new(
        coordinator_repo: Arc<dyn CoordinatorRepository>,
        user_repo: Arc<dyn UserRepository>,
        region_repo: Arc<dyn RegionRepository>,
        statuses: StatusRegistry,
    ) -> Self {
        Self {
            lifecycle: LifecycleService::new(coordinator_repo, statuses),
            user_repo,
            region_repo,
        }
    }

    /// The user and region must exist, and the user must not already be a
    /// live coordinator.
    pub async fn create_coordinator(&self, new_coordinator: NewCoordinator) -> ServiceResult<Coordinator> {
        let id_user = new_coordinator.id_user;

        IntegrityChecks::new()
            .exists::<User, _>(&*self.user_repo, id_user)
            .exists::<Region, _>(&*self.region_repo, new_coordinator.id_region)
            .unique(
                self.lifecycle.repository().find_by_user_id(id_user),
                format!("User with ID {} is already a coordinator", id_user),
            )
            .run()
            .await?;

        Ok(self.lifecycle.create(new_coordinator.into_coordinator()).await?)
    }

    pub async fn update_coordinator(&self, id: Uuid, update: UpdateCoordinator) -> ServiceResult<Coordinator> {
        Ok(self.lifecycle.update(id, update).await?)
    }

    pub async fn delete_coordinator(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.soft_delete(id).await?)
    }

    pub async fn hard_delete_coordinator(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.hard_delete(id).await?)
    }

    pub async fn get_coordinator(&self, id: Uuid) -> ServiceResult<Coordinator> {
        Ok(self.lifecycle.get(id).await?)
    }

    pub async fn list_coordinators(&self) -> ServiceResult<Vec<Coordinator>> {
        Ok(self.lifecycle.list().await?)
    }

    pub async fn find_coordinators_by_user_id(&self, user_id: Uuid) -> ServiceResult<Vec<Coordinator>> {
        Ok(self.lifecycle.repository().find_by_user_id(user_id).await?)
    }

    pub async fn find_coordinators_by_region_id(&self, region_id: Uuid) -> ServiceResult<Vec<Coordinator>> {
        Ok(self.lifecycle.repository().find_by_region_id(region_id).await?)
    }
}
