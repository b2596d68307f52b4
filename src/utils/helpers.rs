//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the crate.

use crate::utils::errors::{DirectoryError, Result};

/// Normalize a record id taken from a route parameter or form field.
///
/// Surrounding whitespace is ignored; anything that is not a base-10
/// integer is rejected rather than compared loosely.
pub fn normalize_id(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| DirectoryError::InvalidInput(format!("Invalid id: {:?}", raw)))
}

/// Collapse empty or whitespace-only text into `None`
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        if v.trim().is_empty() {
            None
        } else {
            Some(v)
        }
    })
}

/// Format a GPA the way detail views show it
pub fn format_gpa(gpa: f64) -> String {
    format!("{:.2}", gpa)
}
