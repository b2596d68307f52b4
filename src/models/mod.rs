//! Data models module
//!
//! This module contains the records exchanged with the directory API

pub mod campus;
pub mod fields;
pub mod student;

// Re-export commonly used models
pub use campus::{Campus, CampusInput};
pub use student::{Student, StudentInput};
