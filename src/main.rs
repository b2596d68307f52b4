//! Campus Directory
//!
//! Loads configuration, syncs the directory once and logs an overview of
//! every campus with its enrolled students.

use anyhow::Context;
use tracing::{info, warn};

use campus_directory::{
    config::Settings,
    store::DirectoryStore,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", campus_directory::info());
    info!(base_url = %settings.api.base_url, "Syncing directory");

    let mut store = DirectoryStore::from_settings(&settings)?;

    if !store.refresh().await {
        if let Some(error) = store.campuses().error() {
            warn!(error = error, "Campuses could not be loaded");
        }
        if let Some(error) = store.students().error() {
            warn!(error = error, "Students could not be loaded");
        }
    }

    for campus in store.campuses().items() {
        let enrolled = store.enrolled_students(campus.id);
        info!(
            campus_id = campus.id,
            name = %campus.name,
            enrolled = enrolled.len(),
            "Campus"
        );
    }

    let summary = store.summary();
    info!(
        campuses = summary.campuses,
        students = summary.students,
        enrolled = summary.enrolled,
        unenrolled = summary.unenrolled,
        dangling = summary.dangling,
        "Directory summary"
    );

    if summary.dangling > 0 {
        warn!(count = summary.dangling, "Students reference campuses that no longer exist");
    }

    Ok(())
}
