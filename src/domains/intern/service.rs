use crate::domains::core::{IntegrityChecks, LifecycleService, StatusRegistry};
use crate::domains::intern::repository::InternRepository;
use crate::domains::intern::types::{Intern, NewIntern, UpdateIntern};
use crate::domains::user::{User, UserRepository};
use crate::errors::ServiceResult;
use crate::validation::{Validate, ValidationBuilder};
use std::sync::Arc;
use uuid::Uuid;

pub struct InternService {
    lifecycle: LifecycleService<Intern, dyn InternRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl InternService {
    pub fn new(
        intern_repo: Arc<dyn InternRepository>,
        user_repo: Arc<dyn UserRepository>,
        statuses: StatusRegistry,
    ) -> Self {
        Self {
            lifecycle: LifecycleService::new(intern_repo, statuses),
            user_repo,
        }
    }

    /// The user must exist and must not already be a live intern. Subproject
    /// and facilitator references are not checked here.
    pub async fn create_intern(&self, new_intern: NewIntern) -> ServiceResult<Intern> {
        new_intern.validate()?;
        let id_user = new_intern.id_user;

        IntegrityChecks::new()
            .exists::<User, _>(&*self.user_repo, id_user)
            .unique(
                self.lifecycle.repository().find_by_user_id(id_user),
                format!("User with ID {} is already an intern", id_user),
            )
            .run()
            .await?;

        Ok(self.lifecycle.create(new_intern.into_intern()).await?)
    }

    /// Dates are checked after merging the update over the stored row, so a
    /// lone `end_date` cannot land before the existing `start_date`.
    pub async fn update_intern(&self, id: Uuid, update: UpdateIntern) -> ServiceResult<Intern> {
        if update.start_date.is_some() || update.end_date.is_some() {
            let current = self.lifecycle.get(id).await?;
            let start = update.start_date.or(current.start_date);
            let end = update.end_date.or(current.end_date);
            if let (Some(start), Some(end)) = (start, end) {
                ValidationBuilder::new("end_date", Some(end))
                    .not_before(start)
                    .validate()?;
            }
        }

        Ok(self.lifecycle.update(id, update).await?)
    }

    pub async fn delete_intern(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.soft_delete(id).await?)
    }

    pub async fn hard_delete_intern(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.hard_delete(id).await?)
    }

    pub async fn get_intern(&self, id: Uuid) -> ServiceResult<Intern> {
        Ok(self.lifecycle.get(id).await?)
    }

    pub async fn list_interns(&self) -> ServiceResult<Vec<Intern>> {
        Ok(self.lifecycle.list().await?)
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> ServiceResult<Vec<Intern>> {
        Ok(self.lifecycle.repository().find_by_user_id(user_id).await?)
    }

    pub async fn find_by_social_facilitator_id(&self, facilitator_id: Uuid) -> ServiceResult<Vec<Intern>> {
        Ok(self.lifecycle.repository().find_by_social_facilitator_id(facilitator_id).await?)
    }

    pub async fn find_by_subproject_id(&self, subproject_id: Uuid) -> ServiceResult<Vec<Intern>> {
        Ok(self.lifecycle.repository().find_by_subproject_id(subproject_id).await?)
    }

    pub async fn list_by_school_year(&self, school_year_id: Uuid) -> ServiceResult<Vec<Intern>> {
        Ok(self.lifecycle.list_by_school_year(school_year_id).await?)
    }
}
