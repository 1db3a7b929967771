//! Tests for record file loading and line parsing

use super::write_record_file;
use crate::app::services::fleet_registry::loader::{
    parse_depot_line, parse_station_line, parse_vehicle_line,
};
use crate::app::services::fleet_registry::FleetRegistry;
use crate::config::Config;
use tempfile::TempDir;

#[test]
fn test_parse_vehicle_line_valid() {
    let vehicle = parse_vehicle_line("3 Renault Logan sedan AA1234BB A95", "vehicles.txt", 1)
        .unwrap();

    assert_eq!(vehicle.id, 3);
    assert_eq!(vehicle.firm, "Renault");
    assert_eq!(vehicle.model, "Logan");
    assert_eq!(vehicle.body_type, "sedan");
    assert_eq!(vehicle.plate_number, "AA1234BB");
    assert_eq!(vehicle.fuel_type, "A95");
}

#[test]
fn test_parse_vehicle_line_wrong_token_count() {
    assert!(parse_vehicle_line("3 Renault Logan sedan AA1234BB", "vehicles.txt", 1).is_err());
    assert!(parse_vehicle_line("3 Renault Logan sedan AA1234BB A95 extra", "f", 1).is_err());
    assert!(parse_vehicle_line("x Renault Logan sedan AA1234BB A95", "f", 1).is_err());
}

#[test]
fn test_parse_station_line_fuel_count_drives_tokens() {
    let station =
        parse_station_line("10 Central Main-St-1 2 A95 DP 1 42", "stations.txt", 1).unwrap();

    assert_eq!(station.id, 10);
    assert_eq!(station.name, "Central");
    assert_eq!(station.address, "Main-St-1");
    assert_eq!(station.fuel_types, vec!["A95", "DP"]);
    assert!(station.is_operational);
    assert_eq!(station.cars_served, 42);

    let single = parse_station_line("11 East Hill-Rd-9 1 A92 0 9", "stations.txt", 2).unwrap();
    assert_eq!(single.fuel_types, vec!["A92"]);
    assert!(!single.is_operational);
}

#[test]
fn test_parse_station_line_rejects_bad_shapes() {
    // Fuel count of zero is a loader input error, not a modeled state.
    assert!(parse_station_line("10 Central Main-St-1 0 1 42", "f", 1).is_err());
    // Token count disagrees with the declared fuel count.
    assert!(parse_station_line("10 Central Main-St-1 3 A95 DP 1 42", "f", 1).is_err());
    // Unparseable operational flag.
    assert!(parse_station_line("10 Central Main-St-1 1 A95 maybe 42", "f", 1).is_err());
}

#[test]
fn test_parse_station_line_accepts_boolean_words() {
    let station = parse_station_line("10 Central Main-St-1 1 A95 true 42", "f", 1).unwrap();
    assert!(station.is_operational);

    let station = parse_station_line("10 Central Main-St-1 1 A95 false 42", "f", 1).unwrap();
    assert!(!station.is_operational);
}

#[test]
fn test_parse_depot_line_valid() {
    let depot = parse_depot_line("2 North-Yard 15", "depots.txt", 1).unwrap();
    assert_eq!(depot.id, 2);
    assert_eq!(depot.address, "North-Yard");
    assert_eq!(depot.cars, 15);
}

#[test]
fn test_parse_depot_line_rejects_negative_count() {
    assert!(parse_depot_line("2 North-Yard -3", "depots.txt", 1).is_err());
}

#[test]
fn test_load_full_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    write_record_file(
        temp_dir.path(),
        "vehicles.txt",
        "1 Renault Logan sedan AA0001BB DP\n2 VW Golf hatchback AA0002BB A95\n",
    )
    .unwrap();
    write_record_file(
        temp_dir.path(),
        "stations.txt",
        "10 Central Main-St-1 2 A95 DP 1 3\n11 East Hill-Rd-9 1 A92 1 9\n",
    )
    .unwrap();
    write_record_file(temp_dir.path(), "depots.txt", "1 North-Yard 4\n").unwrap();

    let config = Config::with_data_dir(temp_dir.path());
    let (registry, stats) = FleetRegistry::load(&config);

    assert_eq!(registry.vehicle_count(), 2);
    assert_eq!(registry.station_count(), 2);
    assert_eq!(registry.depot_count(), 1);
    assert_eq!(stats.files_loaded, 3);
    assert_eq!(stats.files_missing, 0);
    assert_eq!(stats.records_loaded, 5);
    assert!(!stats.has_errors());

    // Metadata agrees with the load statistics.
    let metadata = registry.metadata();
    assert_eq!(metadata.total_records(), stats.records_loaded);
    assert_eq!(metadata.data_dir, temp_dir.path());
}

#[test]
fn test_load_missing_file_degrades_to_empty_table() {
    let temp_dir = TempDir::new().unwrap();
    write_record_file(temp_dir.path(), "depots.txt", "1 North-Yard 4\n").unwrap();

    let config = Config::with_data_dir(temp_dir.path());
    let (registry, stats) = FleetRegistry::load(&config);

    // Vehicles and stations degrade to empty; depots still load.
    assert_eq!(registry.vehicle_count(), 0);
    assert_eq!(registry.station_count(), 0);
    assert_eq!(registry.depot_count(), 1);
    assert_eq!(stats.files_missing, 2);
    assert!(stats.has_errors());

    // Queries over the degraded tables behave as "no records".
    assert_eq!(registry.count_diesel_sedans(), 0);
    assert!(registry.station_with_max_served().is_err());
}

#[test]
fn test_load_skips_malformed_lines() {
    let temp_dir = TempDir::new().unwrap();
    write_record_file(
        temp_dir.path(),
        "vehicles.txt",
        "1 Renault Logan sedan AA0001BB DP\nbroken line\n2 VW Golf hatchback AA0002BB A95\n",
    )
    .unwrap();
    write_record_file(temp_dir.path(), "stations.txt", "").unwrap();
    write_record_file(temp_dir.path(), "depots.txt", "").unwrap();

    let config = Config::with_data_dir(temp_dir.path());
    let (registry, stats) = FleetRegistry::load(&config);

    assert_eq!(registry.vehicle_count(), 2);
    assert_eq!(stats.lines_skipped, 1);
    assert!(stats.has_errors());
}

#[test]
fn test_load_skips_blank_lines() {
    let temp_dir = TempDir::new().unwrap();
    write_record_file(temp_dir.path(), "vehicles.txt", "\n\n").unwrap();
    write_record_file(temp_dir.path(), "stations.txt", "\n").unwrap();
    write_record_file(
        temp_dir.path(),
        "depots.txt",
        "1 North-Yard 4\n\n2 South-Yard 7\n",
    )
    .unwrap();

    let config = Config::with_data_dir(temp_dir.path());
    let (registry, stats) = FleetRegistry::load(&config);

    assert_eq!(registry.depot_count(), 2);
    assert_eq!(stats.lines_skipped, 0);
    assert!(!stats.has_errors());
}

#[test]
fn test_load_keeps_first_of_duplicate_ids() {
    let temp_dir = TempDir::new().unwrap();
    write_record_file(temp_dir.path(), "vehicles.txt", "").unwrap();
    write_record_file(temp_dir.path(), "stations.txt", "").unwrap();
    write_record_file(
        temp_dir.path(),
        "depots.txt",
        "1 North-Yard 4\n1 Shadow-Yard 99\n",
    )
    .unwrap();

    let config = Config::with_data_dir(temp_dir.path());
    let (registry, stats) = FleetRegistry::load(&config);

    assert_eq!(registry.depot_count(), 1);
    assert_eq!(registry.depot(1).unwrap().address, "North-Yard");
    assert!(stats.has_errors());
}

#[test]
fn test_load_preserves_file_order() {
    let temp_dir = TempDir::new().unwrap();
    write_record_file(temp_dir.path(), "vehicles.txt", "").unwrap();
    write_record_file(
        temp_dir.path(),
        "stations.txt",
        "30 C Addr-3 1 A95 1 1\n10 A Addr-1 1 A95 1 2\n20 B Addr-2 1 A95 1 3\n",
    )
    .unwrap();
    write_record_file(temp_dir.path(), "depots.txt", "").unwrap();

    let config = Config::with_data_dir(temp_dir.path());
    let (registry, _stats) = FleetRegistry::load(&config);

    let ids: Vec<u32> = registry.stations().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![30, 10, 20]);
}
