//! Record file loading for the fleet registry
//!
//! This module parses the three whitespace-token-delimited record files
//! into the in-memory tables. A missing or unreadable file is reported
//! once and degraded to an empty table; a malformed line is reported and
//! skipped so one bad record never poisons the rest of its table.

use super::stats::LoadStats;
use super::FleetRegistry;
use crate::app::models::{Depot, FuelStation, Vehicle};
use crate::config::Config;
use crate::constants::{DEPOT_TABLE, STATION_TABLE, VEHICLE_TABLE};
use crate::{Error, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

impl FleetRegistry {
    /// Load all three record tables from the configured data directory
    ///
    /// Loading never fails as a whole: each missing file degrades to an
    /// empty table and each malformed line is skipped, with every incident
    /// recorded in the returned [`LoadStats`].
    pub fn load(config: &Config) -> (Self, LoadStats) {
        info!(
            "Loading fleet registry from data directory: {}",
            config.data_dir.display()
        );

        let start_time = Instant::now();
        let mut registry = Self::new(config.data_dir.clone());
        let mut stats = LoadStats::new();

        registry.vehicles = load_table(
            &config.vehicles_path(),
            VEHICLE_TABLE,
            &mut stats,
            parse_vehicle_line,
        );
        registry.stations = load_table(
            &config.stations_path(),
            STATION_TABLE,
            &mut stats,
            parse_station_line,
        );
        registry.depots = load_table(
            &config.depots_path(),
            DEPOT_TABLE,
            &mut stats,
            parse_depot_line,
        );

        // Identifiers are unique within their table; keep the first
        // occurrence of any duplicate, as for any other bad input line.
        dedupe_by_id(&mut registry.vehicles, VEHICLE_TABLE, &mut stats, |v| v.id);
        dedupe_by_id(&mut registry.stations, STATION_TABLE, &mut stats, |s| s.id);
        dedupe_by_id(&mut registry.depots, DEPOT_TABLE, &mut stats, |d| d.id);

        stats.records_loaded =
            registry.vehicles.len() + registry.stations.len() + registry.depots.len();
        stats.load_duration = start_time.elapsed();

        info!("Fleet registry loaded: {}", stats.summary());

        (registry, stats)
    }
}

/// Read one record table, skipping malformed lines
fn load_table<T, F>(path: &Path, table: &str, stats: &mut LoadStats, parse: F) -> Vec<T>
where
    F: Fn(&str, &str, usize) -> Result<T>,
{
    let file = path.display().to_string();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Could not read {} file {}: {}", table, file, e);
            stats.files_missing += 1;
            stats.errors.push(format!("{}: {}", file, e));
            return Vec::new();
        }
    };

    stats.files_loaded += 1;

    let mut records = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        debug!("{} record line: {}", table, line);

        match parse(line, &file, index + 1) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Skipping malformed {} record: {}", table, e);
                stats.lines_skipped += 1;
                stats.errors.push(e.to_string());
            }
        }
    }

    debug!("Loaded {} {} records from {}", records.len(), table, file);
    records
}

/// Drop records whose identifier was already seen, keeping table order
fn dedupe_by_id<T, F>(records: &mut Vec<T>, table: &str, stats: &mut LoadStats, id: F)
where
    F: Fn(&T) -> u32,
{
    let mut seen = HashSet::new();
    records.retain(|record| {
        let record_id = id(record);
        if seen.insert(record_id) {
            true
        } else {
            warn!(
                "Duplicate {} id {} found, keeping first occurrence",
                table, record_id
            );
            stats.lines_skipped += 1;
            stats
                .errors
                .push(format!("duplicate {} id {}", table, record_id));
            false
        }
    });
}

/// Parse one vehicle record line
///
/// Format: `id firm model body_type plate_number fuel_type`
/// (six whitespace-separated tokens).
pub fn parse_vehicle_line(line: &str, file: &str, line_no: usize) -> Result<Vehicle> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 6 {
        return Err(Error::record_format(
            file,
            line_no,
            format!("expected 6 tokens, found {}", tokens.len()),
        ));
    }

    let id = parse_u32(tokens[0], "vehicle id", file, line_no)?;

    Vehicle::new(
        id,
        tokens[1].to_string(),
        tokens[2].to_string(),
        tokens[3].to_string(),
        tokens[4].to_string(),
        tokens[5].to_string(),
    )
}

/// Parse one fuel station record line
///
/// Format: `id name address fuel_count fuel_1 .. fuel_N is_operational
/// cars_served`, where `fuel_count` determines how many fuel-type tokens
/// follow.
pub fn parse_station_line(line: &str, file: &str, line_no: usize) -> Result<FuelStation> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(Error::record_format(
            file,
            line_no,
            format!("expected at least 4 tokens, found {}", tokens.len()),
        ));
    }

    let id = parse_u32(tokens[0], "station id", file, line_no)?;
    let fuel_count = parse_u32(tokens[3], "fuel-type count", file, line_no)? as usize;

    if fuel_count == 0 {
        return Err(Error::record_format(
            file,
            line_no,
            "station must list at least one fuel type",
        ));
    }

    let expected = 4 + fuel_count + 2;
    if tokens.len() != expected {
        return Err(Error::record_format(
            file,
            line_no,
            format!(
                "expected {} tokens for {} fuel types, found {}",
                expected,
                fuel_count,
                tokens.len()
            ),
        ));
    }

    let fuel_types = tokens[4..4 + fuel_count]
        .iter()
        .map(|code| code.to_string())
        .collect();
    let is_operational = parse_bool(tokens[4 + fuel_count], file, line_no)?;
    let cars_served = parse_u32(tokens[5 + fuel_count], "cars served", file, line_no)?;

    FuelStation::new(
        id,
        tokens[1].to_string(),
        tokens[2].to_string(),
        fuel_types,
        is_operational,
        cars_served,
    )
}

/// Parse one depot record line
///
/// Format: `id address cars` (three whitespace-separated tokens).
pub fn parse_depot_line(line: &str, file: &str, line_no: usize) -> Result<Depot> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(Error::record_format(
            file,
            line_no,
            format!("expected 3 tokens, found {}", tokens.len()),
        ));
    }

    let id = parse_u32(tokens[0], "depot id", file, line_no)?;
    let cars = parse_u32(tokens[2], "vehicle count", file, line_no)?;

    Depot::new(id, tokens[1].to_string(), cars)
}

fn parse_u32(token: &str, field: &str, file: &str, line_no: usize) -> Result<u32> {
    token.parse().map_err(|_| {
        Error::record_format(
            file,
            line_no,
            format!("invalid {}: '{}'", field, token),
        )
    })
}

fn parse_bool(token: &str, file: &str, line_no: usize) -> Result<bool> {
    match token {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => Err(Error::record_format(
            file,
            line_no,
            format!("invalid operational flag: '{}'", other),
        )),
    }
}
