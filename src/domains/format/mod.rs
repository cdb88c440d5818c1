pub mod repository;
pub mod service;
pub mod types;

pub use repository::{FormatRepository, SqliteFormatRepository};
pub use service::FormatService;
pub use types::Format;
