pub mod repository;
pub mod service;
pub mod types;

pub use repository::{SqliteSuccessStoryRepository, SuccessStoryRepository};
pub use service::SuccessStoryService;
pub use types::SuccessStory;
