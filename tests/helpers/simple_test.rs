//! Simple test infrastructure for basic testing
//!
//! Shared logging setup and store construction against a mock server

use std::sync::Once;
use campus_directory::config::{Settings, StoreConfig};
use campus_directory::DirectoryStore;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Simple test context owning a scratch directory
pub struct SimpleTestContext {
    pub temp_dir: Option<tempfile::TempDir>,
}

impl SimpleTestContext {
    /// Create a new simple test context
    pub fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        init_test_env();

        Ok(Self {
            temp_dir: Some(tempfile::tempdir()?),
        })
    }

    /// Get temp directory path
    pub fn temp_path(&self) -> Option<&std::path::Path> {
        self.temp_dir.as_ref().map(|d| d.path())
    }
}

/// Settings pointing at a mock server
pub fn test_settings(base_url: &str) -> Settings {
    let mut settings = Settings::default();
    settings.api.base_url = base_url.to_string();
    settings.api.timeout_seconds = 5;
    settings
}

/// Fresh store talking to `base_url` with default store behaviour
pub fn test_store(base_url: &str) -> DirectoryStore {
    init_test_env();
    DirectoryStore::from_settings(&test_settings(base_url)).expect("Failed to create store")
}

/// Fresh store with custom store behaviour
pub fn test_store_with(base_url: &str, store: StoreConfig) -> DirectoryStore {
    init_test_env();
    let mut settings = test_settings(base_url);
    settings.store = store;
    DirectoryStore::from_settings(&settings).expect("Failed to create store")
}
