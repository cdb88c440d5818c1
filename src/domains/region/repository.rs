use crate::domains::core::{Criterion, LifecycleRepository, SqliteStore};
use crate::domains::region::types::Region;
use crate::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait RegionRepository: LifecycleRepository<Region> {
    /// Live regions with exactly this name.
    async fn find_by_name(&self, name: &str) -> DomainResult<Vec<Region>>;
}

pub type SqliteRegionRepository = SqliteStore<Region>;

#[async_trait]
impl RegionRepository for SqliteStore<Region> {
    async fn find_by_name(&self, name: &str) -> DomainResult<Vec<Region>> {
        self.fetch_live(Some(Criterion::eq("name_region", name))).await
    }
}
