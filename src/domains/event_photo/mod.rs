pub mod repository;
pub mod service;
pub mod types;

pub use repository::{EventPhotoRepository, SqliteEventPhotoRepository};
pub use service::EventPhotoService;
pub use types::EventPhoto;
