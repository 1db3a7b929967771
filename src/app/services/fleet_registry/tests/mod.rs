//! Shared test utilities and fixtures for fleet registry tests

use crate::app::models::{Depot, FuelStation, Vehicle};
use crate::app::services::fleet_registry::FleetRegistry;
use std::fs;
use std::path::{Path, PathBuf};

pub mod loader_tests;

/// Create a test vehicle with standard parameters
pub fn create_test_vehicle(id: u32, body_type: &str, fuel_type: &str) -> Vehicle {
    Vehicle::new(
        id,
        "Renault".to_string(),
        "Logan".to_string(),
        body_type.to_string(),
        format!("AA{:04}BB", id),
        fuel_type.to_string(),
    )
    .unwrap()
}

/// Create a test station with standard parameters
pub fn create_test_station(
    id: u32,
    fuel_types: &[&str],
    is_operational: bool,
    cars_served: u32,
) -> FuelStation {
    FuelStation::new(
        id,
        format!("Station-{}", id),
        format!("Address-{}", id),
        fuel_types.iter().map(|code| code.to_string()).collect(),
        is_operational,
        cars_served,
    )
    .unwrap()
}

/// Create a test depot with standard parameters
pub fn create_test_depot(id: u32, cars: u32) -> Depot {
    Depot::new(id, format!("Yard-{}", id), cars).unwrap()
}

/// Create a registry populated with a small representative fleet
pub fn create_test_registry() -> FleetRegistry {
    let mut registry = FleetRegistry::new(PathBuf::from("/test"));

    registry.vehicles = vec![
        create_test_vehicle(1, "sedan", "DP"),
        create_test_vehicle(2, "hatchback", "A95"),
        create_test_vehicle(3, "sedan", "A95"),
        create_test_vehicle(4, "sedan", "DP"),
    ];

    registry.stations = vec![
        create_test_station(10, &["A95", "DP"], true, 3),
        create_test_station(11, &["A92"], true, 9),
        create_test_station(12, &["DP"], false, 20),
    ];

    registry.depots = vec![
        create_test_depot(1, 4),
        create_test_depot(2, 9),
        create_test_depot(3, 9),
    ];

    registry
}

/// Write a record file into a test data directory
pub fn write_record_file(dir: &Path, name: &str, contents: &str) -> std::io::Result<()> {
    fs::write(dir.join(name), contents)
}
