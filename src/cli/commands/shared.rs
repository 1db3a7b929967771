//! Shared components for CLI commands
//!
//! This module contains logging setup, configuration resolution and the
//! result rendering helpers used across the command implementations.

use crate::app::models::{Depot, FuelStation, Vehicle};
use crate::app::services::fleet_registry::{FleetRegistry, LoadStats};
use crate::cli::args::DataOpts;
use crate::config::Config;
use crate::Result;
use colored::Colorize;
use tracing::debug;

/// Set up structured logging for a command
pub fn setup_logging(opts: &DataOpts) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = opts.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("autopark={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Resolve and validate the effective configuration from the shared options
pub fn resolve_config(opts: &DataOpts) -> Result<Config> {
    let data_dir = match &opts.data_dir {
        Some(path) => path.clone(),
        None => Config::default_data_dir(),
    };

    let config = Config::with_data_dir(data_dir);
    config.validate()?;
    Ok(config)
}

/// Load the registry and report load problems once, to stderr
pub fn load_registry(config: &Config) -> (FleetRegistry, LoadStats) {
    let (registry, stats) = FleetRegistry::load(config);

    if stats.has_errors() {
        eprintln!(
            "{} {} problem(s) while loading record files:",
            "warning:".yellow().bold(),
            stats.errors.len()
        );
        for error in &stats.errors {
            eprintln!("  {}", error);
        }
    }

    (registry, stats)
}

/// One-line rendering of a station query result
pub fn format_station(station: &FuelStation) -> String {
    format!("{} - {}", station.name, station.address)
}

/// One-line rendering of a vehicle query result
pub fn format_vehicle(vehicle: &Vehicle) -> String {
    format!(
        "{} {} - {}",
        vehicle.firm, vehicle.model, vehicle.plate_number
    )
}

/// One-line rendering of a depot query result
pub fn format_depot(depot: &Depot) -> String {
    format!("{} - {} ({} vehicles)", depot.id, depot.address, depot.cars)
}
