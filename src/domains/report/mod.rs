pub mod repository;
pub mod service;
pub mod types;

pub use repository::{ReportRepository, SqliteReportRepository};
pub use service::ReportService;
pub use types::Report;
