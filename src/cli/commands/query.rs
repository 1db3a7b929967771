//! One-shot query command
//!
//! Runs a single read-only query against the loaded tables and prints the
//! result, either as human-readable lines or as JSON for scripting.

use super::shared::{
    format_depot, format_station, format_vehicle, load_registry, resolve_config, setup_logging,
};
use crate::app::models::{FuelStation, Vehicle};
use crate::cli::args::{OutputFormat, QueryArgs, QueryOp};
use crate::Result;
use colored::Colorize;
use serde_json::json;
use tracing::info;

/// Query command runner
pub fn run_query(args: QueryArgs) -> Result<()> {
    setup_logging(&args.data)?;

    let config = resolve_config(&args.data)?;
    let (registry, _stats) = load_registry(&config);

    info!("Running query: {:?}", args.op);

    match &args.op {
        QueryOp::StationsForVehicle { vehicle_id } => {
            let stations = registry.stations_for_vehicle(*vehicle_id)?;
            print_stations(
                &stations,
                &format!("Stations suitable for vehicle {}", vehicle_id),
                args.format,
            )?;
        }
        QueryOp::DieselSedans => {
            let count = registry.count_diesel_sedans();
            match args.format {
                OutputFormat::Human => {
                    println!("Diesel sedans in the fleet: {}", count.to_string().green());
                }
                OutputFormat::Json => print_json(&json!({ "diesel_sedans": count }))?,
            }
        }
        QueryOp::LackingFuel { fuel_type } => {
            let stations = registry.stations_lacking_fuel(fuel_type);
            print_stations(
                &stations,
                &format!("Stations without {}", fuel_type),
                args.format,
            )?;
        }
        QueryOp::MaxServed => {
            let station = registry.station_with_max_served()?;
            match args.format {
                OutputFormat::Human => {
                    println!("Station with the most vehicles served:");
                    println!(
                        "  id {}: {} ({} served)",
                        station.id,
                        format_station(station),
                        station.cars_served
                    );
                }
                OutputFormat::Json => print_json(station)?,
            }
        }
        QueryOp::ByFuel { fuel_type } => {
            let vehicles = registry.vehicles_by_fuel_type(fuel_type);
            print_vehicles(
                &vehicles,
                &format!("Vehicles refuelling with {}", fuel_type),
                args.format,
            )?;
        }
        QueryOp::MaxDepot => {
            let depot = registry.depot_with_max_cars()?;
            match args.format {
                OutputFormat::Human => {
                    println!("Depot housing the most vehicles:");
                    println!("  {}", format_depot(depot));
                }
                OutputFormat::Json => print_json(depot)?,
            }
        }
        QueryOp::WithFuel { fuel_type } => {
            let stations = registry.stations_with_fuel(fuel_type);
            print_stations(
                &stations,
                &format!("Stations dispensing {}", fuel_type),
                args.format,
            )?;
        }
    }

    Ok(())
}

fn print_stations(stations: &[&FuelStation], heading: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if stations.is_empty() {
                println!("{}: none", heading);
            } else {
                println!("{}:", heading);
                for station in stations {
                    println!("  {}", format_station(station));
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(stations)?);
        }
    }
    Ok(())
}

fn print_vehicles(vehicles: &[&Vehicle], heading: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if vehicles.is_empty() {
                println!("{}: none", heading);
            } else {
                println!("{}:", heading);
                for vehicle in vehicles {
                    println!("  {}", format_vehicle(vehicle));
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(vehicles)?);
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
