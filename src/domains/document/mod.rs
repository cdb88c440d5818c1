pub mod repository;
pub mod service;
pub mod types;

pub use repository::{DocumentRepository, SqliteDocumentRepository};
pub use service::DocumentService;
pub use types::Document;
