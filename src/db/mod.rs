// ABOUTME: Database module exports for the inspector
// ABOUTME: Contains the read-only SQLite connection wrapper

pub mod inspector;

pub use inspector::{InspectError, Inspector};
