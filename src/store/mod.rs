//! Directory store module
//!
//! This module holds the in-memory campus and student collections, the
//! store that keeps them in sync with the API, and the views derived
//! from them.

pub mod collection;
pub mod directory;
pub mod views;

pub use collection::{Collection, LoadState};
pub use directory::{CampusRemoval, DirectoryStore};
pub use views::DirectorySummary;
