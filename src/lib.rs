//! Campus Directory
//!
//! Client-side synchronization and validation layer for a campus and student
//! directory backed by a REST-ish JSON API. The store keeps the two
//! collections consistent across mutations, validation runs entirely before
//! the network, and derived views are pure projections over the cache.

pub mod config;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{DirectoryError, Result};

// Re-export main components for easy access
pub use models::{Campus, CampusInput, Student, StudentInput};
pub use services::DirectoryApi;
pub use store::{DirectoryStore, LoadState};
pub use validation::{CampusForm, StudentForm};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
