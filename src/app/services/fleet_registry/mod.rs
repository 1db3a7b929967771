//! Fleet registry service holding the three record tables
//!
//! This module owns the in-memory vehicle, fuel station and depot tables
//! for the lifetime of a run. Tables are populated once from their record
//! files and queried by linear scan; table order is preserved because the
//! query operations report results in it.

use crate::app::models::{Depot, FuelStation, Vehicle};
use std::path::PathBuf;

pub mod loader;
pub mod mutation;
pub mod persister;
pub mod query;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use stats::{LoadStats, RegistryMetadata};

/// The three fleet record tables, owned by a single top-level context
///
/// Vehicles and stations are read-only after load. The depot table is
/// mutated solely through [`FleetRegistry::adjust_depot_cars`] and is the
/// only table persisted back to disk.
#[derive(Debug, Clone)]
pub struct FleetRegistry {
    /// Vehicle table in file order
    pub(crate) vehicles: Vec<Vehicle>,

    /// Fuel station table in file order
    pub(crate) stations: Vec<FuelStation>,

    /// Depot table in file order
    pub(crate) depots: Vec<Depot>,

    /// Directory the tables were loaded from
    pub(crate) data_dir: PathBuf,
}

impl FleetRegistry {
    /// Create a new empty registry rooted at the given data directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            vehicles: Vec::new(),
            stations: Vec::new(),
            depots: Vec::new(),
            data_dir,
        }
    }

    /// Look up a vehicle by identifier (first match in table order)
    pub fn vehicle(&self, vehicle_id: u32) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == vehicle_id)
    }

    /// Look up a depot by identifier (first match in table order)
    pub fn depot(&self, depot_id: u32) -> Option<&Depot> {
        self.depots.iter().find(|d| d.id == depot_id)
    }

    /// All vehicles in table order
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// All fuel stations in table order
    pub fn stations(&self) -> &[FuelStation] {
        &self.stations
    }

    /// All depots in table order
    pub fn depots(&self) -> &[Depot] {
        &self.depots
    }

    /// Number of vehicles in the registry
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// Number of fuel stations in the registry
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of depots in the registry
    pub fn depot_count(&self) -> usize {
        self.depots.len()
    }

    /// Get registry metadata
    pub fn metadata(&self) -> RegistryMetadata {
        RegistryMetadata {
            data_dir: self.data_dir.clone(),
            vehicle_count: self.vehicles.len(),
            station_count: self.stations.len(),
            depot_count: self.depots.len(),
        }
    }
}
