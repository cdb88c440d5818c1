pub mod repository;
pub mod service;
pub mod types;

pub use repository::{CoordinatorRepository, SqliteCoordinatorRepository};
pub use service::CoordinatorService;
pub use types::Coordinator;
