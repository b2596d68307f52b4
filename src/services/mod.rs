//! Services module
//!
//! This module contains the clients for external collaborators

pub mod api;

// Re-export commonly used services
pub use api::{DirectoryApi, Record};
