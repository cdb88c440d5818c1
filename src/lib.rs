// Public modules
pub mod auth;
pub mod config;
pub mod db_migration;
pub mod domains;
pub mod errors;
pub mod globals;
pub mod types;
pub mod validation;

pub use config::AppConfig;
pub use globals::{get_db_pool, get_services, initialize, ServiceRegistry};
