//! Application constants for autopark
//!
//! This module contains the fuel-type code set, record file names and
//! other fixed values used throughout the application.

// =============================================================================
// Fuel-Type Codes
// =============================================================================

/// Fuel-type codes known to appear in the record files
///
/// The code set is open: vehicles and stations may carry codes outside this
/// list and queries still match them by exact string equality. This list
/// exists only for menu hints and input suggestions.
pub const KNOWN_FUEL_TYPES: &[&str] = &["A92", "A95", "A98", "DP"];

/// Fuel-type code for diesel
pub const DIESEL_FUEL_TYPE: &str = "DP";

/// Body-type label identifying a sedan
pub const SEDAN_BODY_TYPE: &str = "sedan";

// =============================================================================
// Record File Names
// =============================================================================

/// File name of the vehicle table within the data directory
pub const VEHICLES_FILE_NAME: &str = "vehicles.txt";

/// File name of the fuel station table within the data directory
pub const STATIONS_FILE_NAME: &str = "stations.txt";

/// File name of the depot table within the data directory
pub const DEPOTS_FILE_NAME: &str = "depots.txt";

/// Directory name used for the default data location
pub const DEFAULT_DATA_DIR_NAME: &str = "autopark";

// =============================================================================
// Table Names (used in error reporting)
// =============================================================================

/// Display name of the vehicle table
pub const VEHICLE_TABLE: &str = "vehicle";

/// Display name of the fuel station table
pub const STATION_TABLE: &str = "fuel station";

/// Display name of the depot table
pub const DEPOT_TABLE: &str = "depot";

/// Check whether a fuel-type code is one of the commonly used codes
pub fn is_known_fuel_type(code: &str) -> bool {
    KNOWN_FUEL_TYPES.contains(&code)
}
