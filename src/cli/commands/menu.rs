//! Interactive menu command
//!
//! Runs the classic numbered menu loop over the loaded tables: one query
//! or adjustment per user-issued command, run to completion before the next
//! choice is read. Lookup misses, empty-table aggregates and bad input are
//! reported as messages and never end the loop.

use super::shared::{
    format_depot, format_station, format_vehicle, load_registry, resolve_config, setup_logging,
};
use crate::app::services::fleet_registry::FleetRegistry;
use crate::cli::args::MenuArgs;
use crate::cli::input::{prompt_delta, prompt_fuel_type, prompt_id, prompt_line};
use crate::config::Config;
use crate::constants::KNOWN_FUEL_TYPES;
use crate::Result;
use colored::Colorize;
use tracing::info;

/// Menu command runner
pub fn run_menu(args: MenuArgs) -> Result<()> {
    setup_logging(&args.data)?;

    let config = resolve_config(&args.data)?;
    info!("Starting interactive menu, data dir: {}", config.data_dir.display());

    let (mut registry, stats) = load_registry(&config);
    println!("{}", stats.summary());

    loop {
        print_menu();

        let choice = prompt_line("Choice: ")?;
        let result = match choice.as_str() {
            "0" => {
                return Ok(());
            }
            "1" => stations_for_vehicle(&registry),
            "2" => {
                println!(
                    "\nDiesel sedans in the fleet: {}",
                    registry.count_diesel_sedans().to_string().green()
                );
                Ok(())
            }
            "3" => stations_lacking_fuel(&registry),
            "4" => station_with_max_served(&registry),
            "5" => vehicles_by_fuel_type(&registry),
            "6" => depot_with_max_cars(&registry),
            "7" => adjust_depot(&mut registry, &config),
            other => {
                println!("{} '{}' is not a menu choice, pick 0-7", "error:".red(), other);
                Ok(())
            }
        };

        // Recoverable conditions are part of the conversation; anything
        // else (I/O on stdin) ends the session.
        if let Err(e) = result {
            if e.is_recoverable() {
                println!("{} {}", "error:".red(), e);
            } else {
                return Err(e);
            }
        }
    }
}

fn print_menu() {
    println!();
    println!("0 | Exit");
    println!("1 | Stations where a vehicle can refuel");
    println!("2 | Count of diesel sedans in the fleet");
    println!("3 | Stations lacking a given fuel type");
    println!("4 | Station that has served the most vehicles");
    println!("5 | Vehicles refuelling with a given fuel type");
    println!("6 | Depot housing the most vehicles");
    println!("7 | Adjust a depot's vehicle count");
}

fn stations_for_vehicle(registry: &FleetRegistry) -> Result<()> {
    let vehicle_id = prompt_id("Vehicle id: ")?;
    let stations = registry.stations_for_vehicle(vehicle_id)?;

    if stations.is_empty() {
        println!("No suitable stations found for vehicle {}", vehicle_id);
    } else {
        println!("\nStations suitable for vehicle {}:", vehicle_id);
        for station in stations {
            println!("  {}", format_station(station));
        }
    }
    Ok(())
}

fn stations_lacking_fuel(registry: &FleetRegistry) -> Result<()> {
    let fuel_type = prompt_fuel_type(&fuel_prompt())?;
    let stations = registry.stations_lacking_fuel(&fuel_type);

    if stations.is_empty() {
        println!("Every station dispenses {}", fuel_type);
    } else {
        println!("\nStations without {}:", fuel_type);
        for station in stations {
            println!("  {}", format_station(station));
        }
    }
    Ok(())
}

fn station_with_max_served(registry: &FleetRegistry) -> Result<()> {
    let station = registry.station_with_max_served()?;
    println!("\nStation with the most vehicles served:");
    println!(
        "  id {}: {} ({} served)",
        station.id,
        format_station(station),
        station.cars_served
    );
    Ok(())
}

fn vehicles_by_fuel_type(registry: &FleetRegistry) -> Result<()> {
    let fuel_type = prompt_fuel_type(&fuel_prompt())?;
    let vehicles = registry.vehicles_by_fuel_type(&fuel_type);

    if vehicles.is_empty() {
        println!("No vehicles refuel with {}", fuel_type);
    } else {
        println!("\nVehicles refuelling with {}:", fuel_type);
        for vehicle in vehicles {
            println!("  {}", format_vehicle(vehicle));
        }
    }
    Ok(())
}

fn depot_with_max_cars(registry: &FleetRegistry) -> Result<()> {
    let depot = registry.depot_with_max_cars()?;
    println!("\nDepot housing the most vehicles:");
    println!("  {}", format_depot(depot));
    Ok(())
}

fn adjust_depot(registry: &mut FleetRegistry, config: &Config) -> Result<()> {
    let depot_id = prompt_id("Depot id: ")?;
    let delta = prompt_delta("Vehicle count change (negative to dispatch): ")?;

    let updated = registry.adjust_depot_cars(depot_id, delta)?;
    println!(
        "Depot {} now houses {} vehicles",
        updated.id,
        updated.cars.to_string().green()
    );

    // Every successful adjustment re-serializes the whole depot table. A
    // failed save is reported but the in-memory change stands for the rest
    // of the session.
    match registry.save_depots(config) {
        Ok(()) => {
            println!("Depot table saved to {}", config.depots_path().display());
        }
        Err(e) => {
            println!("{} depot table not saved: {}", "warning:".yellow(), e);
        }
    }
    Ok(())
}

fn fuel_prompt() -> String {
    format!("Fuel-type code ({}): ", KNOWN_FUEL_TYPES.join(", "))
}

/// Check the menu's recoverable-error contract against the error kinds it
/// can actually surface
#[cfg(test)]
mod tests {
    use crate::Error;

    #[test]
    fn test_menu_level_errors_are_recoverable() {
        assert!(Error::vehicle_not_found(1).is_recoverable());
        assert!(Error::depot_not_found(1).is_recoverable());
        assert!(Error::empty_table("depot").is_recoverable());
        assert!(Error::depot_underflow(1, 0, -1).is_recoverable());
        assert!(Error::invalid_input("x").is_recoverable());
    }

    #[test]
    fn test_session_level_errors_are_not() {
        let io = Error::io(
            "boom",
            std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        );
        assert!(!io.is_recoverable());
        assert!(!Error::configuration("bad").is_recoverable());
    }
}
