pub mod repository;
pub mod service;
pub mod types;

pub use repository::{ArchiveRepository, SqliteArchiveRepository};
pub use service::ArchiveService;
pub use types::Archive;
