pub mod repository;
pub mod service;
pub mod types;

pub use repository::{SchoolYearRepository, SqliteSchoolYearRepository};
pub use service::SchoolYearService;
pub use types::SchoolYear;
