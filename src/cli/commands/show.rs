//! Table display command
//!
//! Dumps the three loaded record tables together with load statistics, as a
//! quick check of what the data directory actually contains.

use super::shared::{format_depot, format_station, format_vehicle, load_registry, resolve_config, setup_logging};
use crate::cli::args::ShowArgs;
use crate::Result;
use colored::Colorize;

/// Show command runner
pub fn run_show(args: ShowArgs) -> Result<()> {
    setup_logging(&args.data)?;

    let config = resolve_config(&args.data)?;
    let (registry, stats) = load_registry(&config);
    let metadata = registry.metadata();

    println!("{}", "Data directory".bold());
    println!("  {}", metadata.data_dir.display());
    println!("  {} records across the three tables", metadata.total_records());
    println!();

    println!("{} ({})", "Vehicles".bold(), metadata.vehicle_count);
    for vehicle in registry.vehicles() {
        println!(
            "  id {}: {} [{}, {}]",
            vehicle.id,
            format_vehicle(vehicle),
            vehicle.body_type,
            vehicle.fuel_type
        );
    }
    println!();

    println!("{} ({})", "Fuel stations".bold(), metadata.station_count);
    for station in registry.stations() {
        println!(
            "  id {}: {} [{}] {} ({} served)",
            station.id,
            format_station(station),
            station.fuel_types.join(", "),
            if station.is_operational {
                "open"
            } else {
                "closed"
            },
            station.cars_served
        );
    }
    println!();

    println!("{} ({})", "Depots".bold(), metadata.depot_count);
    for depot in registry.depots() {
        println!("  {}", format_depot(depot));
    }
    println!();

    println!("{}", stats.summary());

    Ok(())
}
