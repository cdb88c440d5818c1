pub mod repository;
pub mod service;
pub mod types;

pub use repository::{InternRepository, SqliteInternRepository};
pub use service::InternService;
pub use types::Intern;
