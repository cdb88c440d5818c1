pub mod repository;
pub mod service;
pub mod types;

pub use repository::{SqliteSubprojectRepository, SubprojectRepository};
pub use service::SubprojectService;
pub use types::Subproject;
