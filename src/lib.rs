// ABOUTME: Main library for the database inspector
// ABOUTME: Contains module declarations and the top-level inspection run

use std::io::Write;

// Module declarations
pub mod config;
pub mod db;
pub mod models;
pub mod report;

pub use config::InspectorConfig;
pub use db::{InspectError, Inspector};

/// Open the configured database, write the report to `out`, then close.
///
/// The connection is owned by the inspector for the whole run and is
/// released on every path, including a failure partway through the tables.
pub fn run<W: Write>(config: &InspectorConfig, out: &mut W) -> Result<(), InspectError> {
    let inspector = Inspector::open(config.database_path())?;
    let table_count = report::write_report(&inspector, config.sample_limit, out)?;
    out.flush()?;

    log::info!(
        "inspected {} table(s) in {}",
        table_count,
        inspector.path().display()
    );
    inspector.close()
}
