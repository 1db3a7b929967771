//! Read-only query operations over the fleet tables
//!
//! Every operation here is a deterministic function of the tables: no
//! query mutates any record, and results preserve table order without
//! additional sorting. Lookup misses and aggregates over empty tables are
//! recoverable conditions reported to the caller, never process failures.

use super::FleetRegistry;
use crate::app::models::{Depot, FuelStation, Vehicle};
use crate::constants::{DEPOT_TABLE, DIESEL_FUEL_TYPE, SEDAN_BODY_TYPE, STATION_TABLE};
use crate::{Error, Result};

impl FleetRegistry {
    /// Find the stations a given vehicle can refuel at
    ///
    /// Looks up the vehicle by identifier, then returns every station that
    /// is operational and dispenses the vehicle's fuel-type code, in
    /// station table order.
    ///
    /// # Errors
    /// * `Error::VehicleNotFound` if no vehicle has the given id
    pub fn stations_for_vehicle(&self, vehicle_id: u32) -> Result<Vec<&FuelStation>> {
        let vehicle = self
            .vehicle(vehicle_id)
            .ok_or_else(|| Error::vehicle_not_found(vehicle_id))?;

        Ok(self
            .stations
            .iter()
            .filter(|station| station.is_operational && station.supports_fuel(&vehicle.fuel_type))
            .collect())
    }

    /// Count the sedans that refuel with diesel
    ///
    /// Matches body type against the sedan label and fuel type against the
    /// diesel code, both by exact case-sensitive equality.
    pub fn count_diesel_sedans(&self) -> usize {
        self.vehicles
            .iter()
            .filter(|v| v.body_type == SEDAN_BODY_TYPE && v.fuel_type == DIESEL_FUEL_TYPE)
            .count()
    }

    /// Find the stations that do not dispense the given fuel-type code
    ///
    /// The operational flag is ignored. No fuel-code validation is applied:
    /// an unrecognized code matches no station's set, so all stations are
    /// returned.
    pub fn stations_lacking_fuel(&self, fuel_type: &str) -> Vec<&FuelStation> {
        self.stations
            .iter()
            .filter(|station| !station.supports_fuel(fuel_type))
            .collect()
    }

    /// Find the stations that dispense the given fuel-type code
    ///
    /// Complement of [`FleetRegistry::stations_lacking_fuel`]; together the
    /// two partition the station table exactly.
    pub fn stations_with_fuel(&self, fuel_type: &str) -> Vec<&FuelStation> {
        self.stations
            .iter()
            .filter(|station| station.supports_fuel(fuel_type))
            .collect()
    }

    /// Find the station that has served the most vehicles
    ///
    /// Ties break to the first station in table order, so repeated calls on
    /// an unmodified table return the identical station.
    ///
    /// # Errors
    /// * `Error::EmptyTable` if the station table is empty
    pub fn station_with_max_served(&self) -> Result<&FuelStation> {
        let mut best: Option<&FuelStation> = None;
        for station in &self.stations {
            if best.map_or(true, |b| station.cars_served > b.cars_served) {
                best = Some(station);
            }
        }
        best.ok_or_else(|| Error::empty_table(STATION_TABLE))
    }

    /// Find the vehicles that refuel with the given fuel-type code
    ///
    /// Exact match; an empty result is a valid, non-error outcome.
    pub fn vehicles_by_fuel_type(&self, fuel_type: &str) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| v.fuel_type == fuel_type)
            .collect()
    }

    /// Find the depot housing the most vehicles
    ///
    /// Ties break to the first depot in table order for determinism.
    ///
    /// # Errors
    /// * `Error::EmptyTable` if the depot table is empty
    pub fn depot_with_max_cars(&self) -> Result<&Depot> {
        let mut best: Option<&Depot> = None;
        for depot in &self.depots {
            if best.map_or(true, |b| depot.cars > b.cars) {
                best = Some(depot);
            }
        }
        best.ok_or_else(|| Error::empty_table(DEPOT_TABLE))
    }
}
