pub mod repository;
pub mod service;
pub mod types;

pub use repository::{RegionRepository, SqliteRegionRepository};
pub use service::RegionService;
pub use types::Region;
