pub mod repository;
pub mod service;
pub mod types;

pub use repository::{PhotoRepository, SqlitePhotoRepository};
pub use service::PhotoService;
pub use types::Photo;
