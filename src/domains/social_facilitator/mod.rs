pub mod repository;
pub mod service;
pub mod types;

pub use repository::{SocialFacilitatorRepository, SqliteSocialFacilitatorRepository};
pub use service::SocialFacilitatorService;
pub use types::SocialFacilitator;
