//! Autopark Library
//!
//! A Rust library for managing a small vehicle fleet together with the fuel
//! stations that serve it and the depots that house it, all loaded from
//! flat whitespace-delimited record files.
//!
//! This library provides tools for:
//! - Parsing vehicle, fuel station and depot record files with per-line
//!   error recovery
//! - Holding the three record tables in memory for the lifetime of a run
//! - Answering fuel-compatibility, counting, filtering and max-finding
//!   queries over the tables
//! - Adjusting a depot's vehicle count and re-serializing the depot table
//!   back to its source file

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod fleet_registry;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{Depot, FuelStation, Vehicle};
pub use app::services::fleet_registry::FleetRegistry;
pub use config::Config;

/// Result type alias for autopark operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for fleet record loading, querying and persistence
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Record line did not match the expected table format
    #[error("Record format error in file '{file}' line {line}: {message}")]
    RecordFormat {
        file: String,
        line: usize,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Vehicle lookup miss
    #[error("Vehicle not found: id = {vehicle_id}")]
    VehicleNotFound { vehicle_id: u32 },

    /// Depot lookup miss
    #[error("Depot not found: id = {depot_id}")]
    DepotNotFound { depot_id: u32 },

    /// Aggregate query over a table with zero records
    #[error("Cannot answer query: the {table} table is empty")]
    EmptyTable { table: &'static str },

    /// Depot adjustment would drive the vehicle count below zero
    #[error(
        "Adjustment of {delta} would leave depot {depot_id} with a negative vehicle count (current: {cars})"
    )]
    DepotUnderflow { depot_id: u32, cars: u32, delta: i64 },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// User input could not be interpreted
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Serialization to an output format failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a record format error for a specific file line
    pub fn record_format(file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::RecordFormat {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a vehicle not found error
    pub fn vehicle_not_found(vehicle_id: u32) -> Self {
        Self::VehicleNotFound { vehicle_id }
    }

    /// Create a depot not found error
    pub fn depot_not_found(depot_id: u32) -> Self {
        Self::DepotNotFound { depot_id }
    }

    /// Create an empty table error for an aggregate query
    pub fn empty_table(table: &'static str) -> Self {
        Self::EmptyTable { table }
    }

    /// Create a depot underflow error
    pub fn depot_underflow(depot_id: u32, cars: u32, delta: i64) -> Self {
        Self::DepotUnderflow {
            depot_id,
            cars,
            delta,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Whether this error is a recoverable per-query condition that the
    /// caller reports to the user rather than aborting on
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::VehicleNotFound { .. }
                | Self::DepotNotFound { .. }
                | Self::EmptyTable { .. }
                | Self::DepotUnderflow { .. }
                | Self::InvalidInput { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: error.to_string(),
        }
    }
}
