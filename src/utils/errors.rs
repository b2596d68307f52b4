//! Error handling for the campus directory
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy.

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Main error type for directory operations
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Remote API error: {0}")]
    Remote(#[from] RemoteError),

    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: i64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Remote API specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("request timed out")]
    Timeout,

    #[error("directory service unavailable")]
    ServiceUnavailable,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("campus {campus_id} deleted but students {student_ids:?} are still attached")]
    CascadeIncomplete { campus_id: i64, student_ids: Vec<i64> },
}

/// Record kinds held by the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Campus,
    Student,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Campus => write!(f, "Campus"),
            Entity::Student => write!(f, "Student"),
        }
    }
}

/// Field name to message mapping produced by form validation.
///
/// An empty mapping means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    pub fn remove(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Turn a non-empty mapping into an error
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DirectoryError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;

impl DirectoryError {
    /// Check if the error is worth a manual retry by the user
    pub fn is_recoverable(&self) -> bool {
        match self {
            DirectoryError::Validation(_) => false,
            DirectoryError::Remote(RemoteError::Status { status, .. }) => *status >= 500,
            DirectoryError::Remote(RemoteError::InvalidResponse(_)) => false,
            DirectoryError::Remote(_) => true,
            DirectoryError::NotFound { .. } => false,
            DirectoryError::Config(_) => false,
            DirectoryError::InvalidInput(_) => false,
            DirectoryError::Http(_) => true,
            DirectoryError::Serialization(_) => false,
            DirectoryError::Io(_) => true,
            DirectoryError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DirectoryError::Config(_) => ErrorSeverity::Critical,
            DirectoryError::Validation(_) => ErrorSeverity::Info,
            DirectoryError::InvalidInput(_) => ErrorSeverity::Info,
            DirectoryError::NotFound { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// Validation mapping carried by the error, if any
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            DirectoryError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
