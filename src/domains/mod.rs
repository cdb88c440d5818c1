pub mod archive;
pub mod coordinator;
pub mod core;
pub mod document;
pub mod event;
pub mod event_photo;
pub mod format;
pub mod intern;
pub mod photo;
pub mod region;
pub mod report;
pub mod school_year;
pub mod social_facilitator;
pub mod subproject;
pub mod success_story;
pub mod training;
pub mod user;

pub use user::{User, UserService};
