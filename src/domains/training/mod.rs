pub mod repository;
pub mod service;
pub mod types;

pub use repository::{TrainingRepository, SqliteTrainingRepository};
pub use service::TrainingService;
pub use types::Training;
