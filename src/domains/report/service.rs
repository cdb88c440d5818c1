use crate::domains::archive::{Archive, ArchiveRepository};
use crate::domains::core::{IntegrityChecks, LifecycleService, StatusRegistry};
use crate::domains::report::repository::ReportRepository;
use crate::domains::report::types::{NewReport, Report, UpdateReport};
use crate::domains::user::{User, UserRepository};
use crate::errors::ServiceResult;
use crate::validation::Validate;
use std::sync::Arc;
use uuid::Uuid;

pub struct ReportService {
    lifecycle: LifecycleService<Report, dyn ReportRepository>,
    user_repo: Arc<dyn UserRepository>,
    archive_repo: Arc<dyn ArchiveRepository>,
}

impl ReportService {
    pub fn new(
        report_repo: Arc<dyn ReportRepository>,
        user_repo: Arc<dyn UserRepository>,
        archive_repo: Arc<dyn ArchiveRepository>,
        statuses: StatusRegistry,
    ) -> Self {
        Self {
            lifecycle: LifecycleService::new(report_repo, statuses),
            user_repo,
            archive_repo,
        }
    }

    pub async fn create_report(&self, new_report: NewReport) -> ServiceResult<Report> {
        new_report.validate()?;

        IntegrityChecks::new()
            .exists::<User, _>(&*self.user_repo, new_report.created_by)
            .exists_if_present::<Archive, _>(&*self.archive_repo, new_report.id_archive)
            .run()
            .await?;

        Ok(self.lifecycle.create(new_report.into_report()).await?)
    }

    pub async fn update_report(&self, id: Uuid, update: UpdateReport) -> ServiceResult<Report> {
        Ok(self.lifecycle.update(id, update).await?)
    }

    pub async fn delete_report(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.soft_delete(id).await?)
    }

    pub async fn hard_delete_report(&self, id: Uuid) -> ServiceResult<()> {
        Ok(self.lifecycle.hard_delete(id).await?)
    }

    pub async fn get_report(&self, id: Uuid) -> ServiceResult<Report> {
        Ok(self.lifecycle.get(id).await?)
    }

    pub async fn list_reports(&self) -> ServiceResult<Vec<Report>> {
        Ok(self.lifecycle.list().await?)
    }

    pub async fn find_by_creator_id(&self, creator_id: Uuid) -> ServiceResult<Vec<Report>> {
        Ok(self.lifecycle.repository().find_by_creator_id(creator_id).await?)
    }

    pub async fn find_by_type(&self, report_type: &str) -> ServiceResult<Vec<Report>> {
        Ok(self.lifecycle.repository().find_by_type(report_type).await?)
    }

    pub async fn list_by_school_year(&self, school_year_id: Uuid) -> ServiceResult<Vec<Report>> {
        Ok(self.lifecycle.list_by_school_year(school_year_id).await?)
    }
}
