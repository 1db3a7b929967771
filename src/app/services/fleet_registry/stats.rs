//! Registry loading statistics and metadata
//!
//! This module defines the data structures for tracking what happened while
//! the record tables were being loaded.

use std::path::PathBuf;
use std::time::Duration;

/// Statistics about the record loading process
#[derive(Debug, Clone)]
pub struct LoadStats {
    /// Number of record files found and read
    pub files_loaded: usize,

    /// Number of record files that were missing or unreadable
    pub files_missing: usize,

    /// Number of records loaded across all tables
    pub records_loaded: usize,

    /// Number of lines skipped because they did not parse
    pub lines_skipped: usize,

    /// Time taken to load all tables
    pub load_duration: Duration,

    /// Any errors encountered during loading
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            files_loaded: 0,
            files_missing: 0,
            records_loaded: 0,
            lines_skipped: 0,
            load_duration: Duration::ZERO,
            errors: Vec::new(),
        }
    }

    /// Check if any errors occurred during loading
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} records from {} files ({} missing, {} lines skipped) in {:.2}ms",
            self.records_loaded,
            self.files_loaded,
            self.files_missing,
            self.lines_skipped,
            self.load_duration.as_secs_f64() * 1000.0
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata about a loaded registry
#[derive(Debug, Clone)]
pub struct RegistryMetadata {
    /// Directory the tables were loaded from
    pub data_dir: PathBuf,

    /// Number of vehicles in the registry
    pub vehicle_count: usize,

    /// Number of fuel stations in the registry
    pub station_count: usize,

    /// Number of depots in the registry
    pub depot_count: usize,
}

impl RegistryMetadata {
    /// Total number of records across all three tables
    pub fn total_records(&self) -> usize {
        self.vehicle_count + self.station_count + self.depot_count
    }
}
