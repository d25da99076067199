// ABOUTME: Configuration for the inspector
// ABOUTME: Holds the fixed database path and the per-table sample limit

use std::path::{Path, PathBuf};

/// Database file inspected by the binary, relative to the working directory
pub const DEFAULT_DATABASE_PATH: &str = "Batangas_Risk_Monitoring.sqlite";

/// Maximum number of rows sampled from each table
pub const DEFAULT_SAMPLE_LIMIT: u32 = 20;

/// Inspector settings; the binary always runs with [`InspectorConfig::default`]
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorConfig {
    pub database_path: PathBuf,
    pub sample_limit: u32,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }
}

impl InspectorConfig {
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}
