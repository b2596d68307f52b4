//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;
use crate::utils::errors::{DirectoryError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate remote API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.trim().is_empty() {
        return Err(DirectoryError::Config(
            "API base URL is required".to_string()
        ));
    }

    let url = Url::parse(&config.base_url)
        .map_err(|e| DirectoryError::Config(format!("Invalid API base URL: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(DirectoryError::Config(
            format!("API base URL must use http or https, got {}", url.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(DirectoryError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(DirectoryError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(DirectoryError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
