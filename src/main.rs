// ABOUTME: Entry point for the database inspector
// ABOUTME: Sets up logging and runs the inspection against the fixed database path

use anyhow::Context;
use db_inspector_lib::InspectorConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = InspectorConfig::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    db_inspector_lib::run(&config, &mut out)
        .with_context(|| format!("Failed to inspect {}", config.database_path().display()))
}
