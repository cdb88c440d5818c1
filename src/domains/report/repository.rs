use crate::domains::core::{Criterion, LifecycleRepository, SchoolYearScoped, SqliteStore};
use crate::domains::report::types::Report;
use crate::errors::DomainResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait ReportRepository: LifecycleRepository<Report> + SchoolYearScoped<Report> {
    async fn find_by_creator_id(&self, creator_id: Uuid) -> DomainResult<Vec<Report>>;
    async fn find_by_type(&self, report_type: &str) -> DomainResult<Vec<Report>>;
}

pub type SqliteReportRepository = SqliteStore<Report>;

#[async_trait]
impl ReportRepository for SqliteStore<Report> {
    async fn find_by_creator_id(&self, creator_id: Uuid) -> DomainResult<Vec<Report>> {
        self.fetch_live(Some(Criterion::eq("created_by", creator_id))).await
    }

    async fn find_by_type(&self, report_type: &str) -> DomainResult<Vec<Report>> {
        self.fetch_live(Some(Criterion::eq("report_type", report_type))).await
    }
}
