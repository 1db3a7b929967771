//! Data models for fleet records
//!
//! This module contains the core data structures for the three record
//! tables: vehicles, fuel stations and depots. Vehicles and stations are
//! immutable after load; the depot is the only record with a defined
//! post-load mutation (its vehicle count).

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Vehicle Record
// =============================================================================

/// A single vehicle in the fleet
///
/// Identifiers are unique within the vehicle table. A vehicle id has no
/// relation to station or depot ids sharing the same value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Vehicle {
    /// Unique identifier within the vehicle table
    pub id: u32,

    /// Manufacturer name (e.g. "Renault")
    pub firm: String,

    /// Model name
    pub model: String,

    /// Body type category, free text (e.g. "sedan", "hatchback")
    pub body_type: String,

    /// Registration plate number
    pub plate_number: String,

    /// Fuel-type code the vehicle refuels with (e.g. "A95", "DP")
    pub fuel_type: String,
}

impl Vehicle {
    /// Create a new vehicle record with validation
    pub fn new(
        id: u32,
        firm: String,
        model: String,
        body_type: String,
        plate_number: String,
        fuel_type: String,
    ) -> Result<Self> {
        let vehicle = Self {
            id,
            firm,
            model,
            body_type,
            plate_number,
            fuel_type,
        };

        vehicle.validate()?;
        Ok(vehicle)
    }

    /// Validate the record shape
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("firm", &self.firm),
            ("model", &self.model),
            ("body type", &self.body_type),
            ("plate number", &self.plate_number),
            ("fuel type", &self.fuel_type),
        ] {
            if value.trim().is_empty() {
                return Err(Error::data_validation(format!(
                    "Vehicle {} field cannot be empty",
                    field
                )));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Fuel Station Record
// =============================================================================

/// A fuel station serving the fleet
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FuelStation {
    /// Unique identifier within the station table
    pub id: u32,

    /// Station name
    pub name: String,

    /// Station address
    pub address: String,

    /// Fuel-type codes the station dispenses; never empty once loaded
    pub fuel_types: Vec<String>,

    /// Whether the station is currently open for service
    pub is_operational: bool,

    /// Number of vehicles served so far (static snapshot from load)
    pub cars_served: u32,
}

impl FuelStation {
    /// Create a new station record with validation
    pub fn new(
        id: u32,
        name: String,
        address: String,
        fuel_types: Vec<String>,
        is_operational: bool,
        cars_served: u32,
    ) -> Result<Self> {
        let station = Self {
            id,
            name,
            address,
            fuel_types,
            is_operational,
            cars_served,
        };

        station.validate()?;
        Ok(station)
    }

    /// Validate the record shape
    ///
    /// A station with zero supported fuels is an input error, not a modeled
    /// state.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::data_validation(
                "Station name cannot be empty".to_string(),
            ));
        }

        if self.address.trim().is_empty() {
            return Err(Error::data_validation(
                "Station address cannot be empty".to_string(),
            ));
        }

        if self.fuel_types.is_empty() {
            return Err(Error::data_validation(format!(
                "Station {} must support at least one fuel type",
                self.id
            )));
        }

        if self.fuel_types.iter().any(|code| code.trim().is_empty()) {
            return Err(Error::data_validation(format!(
                "Station {} has an empty fuel-type code",
                self.id
            )));
        }

        Ok(())
    }

    /// Check whether the station dispenses the given fuel-type code
    ///
    /// Exact string match; the order of the supported set is irrelevant.
    pub fn supports_fuel(&self, fuel_type: &str) -> bool {
        self.fuel_types.iter().any(|code| code == fuel_type)
    }
}

// =============================================================================
// Depot Record
// =============================================================================

/// A vehicle storage and maintenance base
///
/// The vehicle count is the only field in the whole data model with a
/// defined post-load mutation, and the depot table is the only one that is
/// persisted back to its source file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Depot {
    /// Unique identifier within the depot table
    pub id: u32,

    /// Depot address
    pub address: String,

    /// Current number of vehicles housed at the depot
    pub cars: u32,
}

impl Depot {
    /// Create a new depot record with validation
    pub fn new(id: u32, address: String, cars: u32) -> Result<Self> {
        let depot = Self { id, address, cars };

        depot.validate()?;
        Ok(depot)
    }

    /// Validate the record shape
    pub fn validate(&self) -> Result<()> {
        if self.address.trim().is_empty() {
            return Err(Error::data_validation(
                "Depot address cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Return a copy of this depot with the vehicle count replaced
    pub fn with_cars(&self, cars: u32) -> Self {
        Self {
            cars,
            ..self.clone()
        }
    }
}
