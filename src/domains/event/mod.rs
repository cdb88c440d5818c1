pub mod repository;
pub mod service;
pub mod types;

pub use repository::{EventRepository, SqliteEventRepository};
pub use service::EventService;
pub use types::Event;
