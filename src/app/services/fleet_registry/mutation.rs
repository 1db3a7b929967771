//! Depot vehicle-count adjustment
//!
//! The single state-changing operation in the system. The depot is located
//! by identifier and the updated record replaces the old one by key, so the
//! change is visible through the shared table without handing out aliased
//! mutable references. Every successful adjustment must be followed by a
//! full re-serialization of the depot table (see the persister module);
//! the CLI command paths drive that step.

use super::FleetRegistry;
use crate::app::models::Depot;
use crate::{Error, Result};
use tracing::info;

impl FleetRegistry {
    /// Adjust a depot's vehicle count by a signed delta
    ///
    /// A positive delta records vehicles added or returned to the depot, a
    /// negative delta vehicles removed or dispatched. An adjustment that
    /// would drive the count below zero is rejected and the table is left
    /// unchanged: a depot inventory has no meaningful negative state.
    ///
    /// Returns a copy of the updated depot record on success.
    ///
    /// # Errors
    /// * `Error::DepotNotFound` if no depot has the given id
    /// * `Error::DepotUnderflow` if the result would be negative
    /// * `Error::DataValidation` if the result does not fit the count field
    pub fn adjust_depot_cars(&mut self, depot_id: u32, delta: i64) -> Result<Depot> {
        let position = self
            .depots
            .iter()
            .position(|d| d.id == depot_id)
            .ok_or_else(|| Error::depot_not_found(depot_id))?;

        let depot = &self.depots[position];
        let adjusted = i64::from(depot.cars)
            .checked_add(delta)
            .ok_or_else(|| overflow_error(depot_id, delta))?;
        if adjusted < 0 {
            return Err(Error::depot_underflow(depot_id, depot.cars, delta));
        }
        let adjusted =
            u32::try_from(adjusted).map_err(|_| overflow_error(depot_id, delta))?;

        let updated = depot.with_cars(adjusted);
        info!(
            "Depot {} vehicle count adjusted by {}: {} -> {}",
            depot_id, delta, depot.cars, updated.cars
        );

        self.depots[position] = updated.clone();
        Ok(updated)
    }
}

fn overflow_error(depot_id: u32, delta: i64) -> Error {
    Error::data_validation(format!(
        "Adjustment of {} overflows the vehicle count of depot {}",
        delta, depot_id
    ))
}
