//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the campus directory.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{DirectoryError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard must stay alive for the file writer to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| DirectoryError::Config(format!("Invalid log filter: {}", e)))?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "campus-directory.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| DirectoryError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a completed or failed store operation
pub fn log_store_operation(operation: &str, entity: &str, id: Option<i64>, success: bool) {
    if success {
        info!(
            operation = operation,
            entity = entity,
            id = id,
            "Store operation completed"
        );
    } else {
        warn!(
            operation = operation,
            entity = entity,
            id = id,
            "Store operation failed"
        );
    }
}

/// Log API errors with context
pub fn log_api_error(method: &str, url: &str, error: &str) {
    error!(
        method = method,
        url = url,
        error = error,
        "API error occurred"
    );
}

/// Log the outcome of a collection re-sync
pub fn log_sync(campuses: usize, students: usize, failed: bool) {
    if failed {
        warn!(campuses = campuses, students = students, "Directory sync finished with failures");
    } else {
        debug!(campuses = campuses, students = students, "Directory sync finished");
    }
}
