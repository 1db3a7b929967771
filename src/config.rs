//! Configuration management and validation.
//!
//! Provides the configuration structure locating the three record files
//! within a data directory, with sensible defaults and validation.

use crate::constants::{
    DEFAULT_DATA_DIR_NAME, DEPOTS_FILE_NAME, STATIONS_FILE_NAME, VEHICLES_FILE_NAME,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for locating the fleet record files
///
/// All three tables live as flat text files inside a single data directory.
/// File names are configurable so tests and alternative layouts can point
/// at their own fixtures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the record files
    pub data_dir: PathBuf,

    /// Vehicle table file name within `data_dir`
    pub vehicles_file: String,

    /// Fuel station table file name within `data_dir`
    pub stations_file: String,

    /// Depot table file name within `data_dir`
    pub depots_file: String,
}

impl Config {
    /// Create a configuration rooted at the given data directory with the
    /// default file names
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            vehicles_file: VEHICLES_FILE_NAME.to_string(),
            stations_file: STATIONS_FILE_NAME.to_string(),
            depots_file: DEPOTS_FILE_NAME.to_string(),
        }
    }

    /// Resolve the default data directory
    ///
    /// Uses the platform data directory (e.g. `~/.local/share/autopark`)
    /// when available, falling back to `./data` otherwise.
    pub fn default_data_dir() -> PathBuf {
        match dirs::data_dir() {
            Some(base) => base.join(DEFAULT_DATA_DIR_NAME),
            None => PathBuf::from("data"),
        }
    }

    /// Full path to the vehicle table file
    pub fn vehicles_path(&self) -> PathBuf {
        self.data_dir.join(&self.vehicles_file)
    }

    /// Full path to the fuel station table file
    pub fn stations_path(&self) -> PathBuf {
        self.data_dir.join(&self.stations_file)
    }

    /// Full path to the depot table file
    pub fn depots_path(&self) -> PathBuf {
        self.data_dir.join(&self.depots_file)
    }

    /// Validate the configuration for consistency
    ///
    /// The data directory must be a directory when it exists; a missing
    /// directory is allowed because the loader degrades missing record
    /// files to empty tables.
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.exists() && !self.data_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Data path is not a directory: {}",
                self.data_dir.display()
            )));
        }

        for name in [&self.vehicles_file, &self.stations_file, &self.depots_file] {
            if name.trim().is_empty() {
                return Err(Error::configuration(
                    "Record file names cannot be empty".to_string(),
                ));
            }
            if Path::new(name).components().count() != 1 {
                return Err(Error::configuration(format!(
                    "Record file name must not contain path separators: {}",
                    name
                )));
            }
        }

        debug!("Configuration validated: data_dir = {}", self.data_dir.display());
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_data_dir(Self::default_data_dir())
    }
}
