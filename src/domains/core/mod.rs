pub mod lifecycle;
pub mod repository;
pub mod row;
pub mod status;
pub mod store;
pub mod validator;

pub use lifecycle::LifecycleService;
pub use repository::{Entity, FindById, LifecycleRepository, Patch, SchoolYearScoped, SchoolYearTagged};
pub use status::{StatusRegistry, ACTIVE_STATUS_NAME, DELETED_STATUS_NAME};
pub use store::{Criterion, SqlValue, SqliteStore};
pub use validator::{assert_exists, assert_unique, IntegrityChecks};
