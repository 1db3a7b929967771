//! Depot table serialization
//!
//! The depot table is the only persisted table. After every successful
//! vehicle-count adjustment the whole table is re-serialized, overwriting
//! the file: one `id address cars` line per depot, space-separated, in
//! table order.

use super::FleetRegistry;
use crate::app::models::Depot;
use crate::{Error, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

/// Serialize the depot table to its line-oriented form
pub fn render_depots(depots: &[Depot]) -> String {
    let mut out = String::new();
    for depot in depots {
        // Infallible for String writers
        let _ = writeln!(out, "{} {} {}", depot.id, depot.address, depot.cars);
    }
    out
}

/// Write the full depot table to the given file, replacing its contents
pub fn save_depots(depots: &[Depot], path: &Path) -> Result<()> {
    fs::write(path, render_depots(depots)).map_err(|e| {
        Error::io(
            format!("Failed to write depot file {}", path.display()),
            e,
        )
    })?;

    info!("Saved {} depot records to {}", depots.len(), path.display());
    Ok(())
}

impl FleetRegistry {
    /// Persist the current depot table back to its source file
    pub fn save_depots(&self, config: &crate::config::Config) -> Result<()> {
        save_depots(&self.depots, &config.depots_path())
    }
}
