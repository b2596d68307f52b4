//! Utility modules
//!
//! This module contains common utilities used throughout the crate,
//! including error handling, logging setup, and helper functions.

pub mod errors;
pub mod logging;
pub mod helpers;

pub use errors::{DirectoryError, RemoteError, ValidationErrors, Entity, Result};
pub use helpers::normalize_id;
