use crate::domains::school_year::repository::SchoolYearRepository;
use crate::domains::school_year::types::{NewSchoolYear, SchoolYear, UpdateSchoolYear};
use crate::errors::{DomainError, ServiceResult, ValidationError};
use crate::validation::Validate;
use log::{debug, warn};
use std::sync::Arc;
use uuid::Uuid;

/// School years are plain reference data: no status and no delete.
pub struct SchoolYearService {
    repo: Arc<dyn SchoolYearRepository>,
}

impl SchoolYearService {
    pub fn new(repo: Arc<dyn SchoolYearRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_school_year(&self, new_year: NewSchoolYear) -> ServiceResult<SchoolYear> {
        new_year.validate()?;

        let name = new_year.name.trim().to_string();
        if self.repo.find_by_name(&name).await?.is_some() {
            warn!("Rejected duplicate school year {}", name);
            return Err(DomainError::Conflict(format!("School year {} already exists", name)).into());
        }

        let saved = self.repo.save(&new_year.into_school_year()).await?;
        debug!("Created school year {}", saved.id);
        Ok(saved)
    }

    pub async fn update_school_year(&self, id: Uuid, update: UpdateSchoolYear) -> ServiceResult<SchoolYear> {
        update.validate()?;

        let mut school_year = self.get_school_year(id).await?;
        if let Some(name) = &update.name {
            if let Some(existing) = self.repo.find_by_name(name.trim()).await? {
                if existing.id != id {
                    return Err(DomainError::Conflict(format!("School year {} already exists", name.trim())).into());
                }
            }
        }

        update.apply_to(&mut school_year);
        if school_year.end_date < school_year.start_date {
            return Err(DomainError::Validation(ValidationError::invalid_value(
                "end_date",
                "must not be before start_date",
            ))
            .into());
        }

        Ok(self.repo.update(&school_year).await?)
    }

    pub async fn get_school_year(&self, id: Uuid) -> ServiceResult<SchoolYear> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::EntityNotFound("SchoolYear".to_string(), id).into())
    }

    pub async fn list_school_years(&self) -> ServiceResult<Vec<SchoolYear>> {
        Ok(self.repo.find_all().await?)
    }

    /// The year currently flagged active, if any. More than one flagged year
    /// is tolerated; the latest start date wins.
    pub async fn get_active_school_year(&self) -> ServiceResult<Option<SchoolYear>> {
        let active = self.repo.find_active().await?;
        if active.len() > 1 {
            warn!("{} school years are flagged active", active.len());
        }
        Ok(active.into_iter().next())
    }
}
