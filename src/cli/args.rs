//! Command-line argument definitions for autopark
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Every command operates over the same three record tables; the
//! shared data-directory and verbosity options are factored into
//! [`DataOpts`].

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the autopark fleet manager
///
/// Manages a small vehicle fleet, its fuel stations and depots from flat
/// whitespace-delimited record files.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "autopark",
    version,
    about = "Manage a vehicle fleet, its fuel stations and depots from flat-file records",
    long_about = "Loads vehicle, fuel station and depot record tables from a data directory \
                  and answers fuel-compatibility, counting, filtering and max-finding queries \
                  over them. Depot vehicle counts can be adjusted, with the depot table \
                  re-serialized back to its source file after every successful adjustment."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for autopark
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the interactive query menu (main command)
    Menu(MenuArgs),
    /// Answer a single query and exit
    Query(QueryArgs),
    /// Adjust a depot's vehicle count and persist the depot table
    Adjust(AdjustArgs),
    /// Display the loaded record tables and load statistics
    Show(ShowArgs),
}

/// Options shared by every command
#[derive(Debug, Clone, Parser)]
pub struct DataOpts {
    /// Data directory containing the record files
    ///
    /// Expected to contain vehicles.txt, stations.txt and depots.txt.
    /// If not specified, defaults to the platform data directory
    /// (falling back to ./data). Missing record files are reported and
    /// treated as empty tables.
    #[arg(
        short = 'd',
        long = "data-dir",
        value_name = "PATH",
        help = "Data directory containing the record files"
    )]
    pub data_dir: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl DataOpts {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

}

/// Arguments for the interactive menu command
#[derive(Debug, Clone, Parser)]
pub struct MenuArgs {
    #[command(flatten)]
    pub data: DataOpts,
}

/// Arguments for the one-shot query command
#[derive(Debug, Clone, Parser)]
pub struct QueryArgs {
    #[command(subcommand)]
    pub op: QueryOp,

    #[command(flatten)]
    pub data: DataOpts,

    /// Output format for query results
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        global = true,
        help = "Output format for query results"
    )]
    pub format: OutputFormat,
}

/// The individual query operations
#[derive(Debug, Clone, Subcommand)]
pub enum QueryOp {
    /// Stations where a given vehicle can refuel
    StationsForVehicle {
        /// Identifier of the vehicle to look up
        #[arg(long = "vehicle", value_name = "ID")]
        vehicle_id: u32,
    },
    /// Number of sedans refuelling with diesel
    DieselSedans,
    /// Stations that do not dispense a given fuel type
    LackingFuel {
        /// Fuel-type code to check for (e.g. A92, A95, A98, DP)
        #[arg(long = "fuel", value_name = "CODE")]
        fuel_type: String,
    },
    /// Station that has served the most vehicles
    MaxServed,
    /// Vehicles refuelling with a given fuel type
    ByFuel {
        /// Fuel-type code to match (e.g. A92, A95, A98, DP)
        #[arg(long = "fuel", value_name = "CODE")]
        fuel_type: String,
    },
    /// Depot housing the most vehicles
    MaxDepot,
    /// Stations that dispense a given fuel type
    WithFuel {
        /// Fuel-type code to match (e.g. A92, A95, A98, DP)
        #[arg(long = "fuel", value_name = "CODE")]
        fuel_type: String,
    },
}

/// Arguments for the one-shot depot adjustment command
#[derive(Debug, Clone, Parser)]
pub struct AdjustArgs {
    /// Identifier of the depot to adjust
    #[arg(long = "depot", value_name = "ID")]
    pub depot_id: u32,

    /// Signed vehicle-count change (positive: added, negative: dispatched)
    #[arg(
        long = "delta",
        value_name = "N",
        allow_hyphen_values = true,
        help = "Signed vehicle-count change"
    )]
    pub delta: i64,

    #[command(flatten)]
    pub data: DataOpts,
}

/// Arguments for the table display command
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    #[command(flatten)]
    pub data: DataOpts,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ladder() {
        let mut opts = DataOpts {
            data_dir: None,
            verbose: 0,
            quiet: false,
        };

        assert_eq!(opts.get_log_level(), "warn");

        opts.verbose = 1;
        assert_eq!(opts.get_log_level(), "info");

        opts.verbose = 2;
        assert_eq!(opts.get_log_level(), "debug");

        opts.verbose = 3;
        assert_eq!(opts.get_log_level(), "trace");

        opts.quiet = true;
        assert_eq!(opts.get_log_level(), "error");
    }

    #[test]
    fn test_parse_query_subcommands() {
        let args = Args::parse_from([
            "autopark",
            "query",
            "stations-for-vehicle",
            "--vehicle",
            "3",
        ]);
        match args.get_command() {
            Commands::Query(query) => match query.op {
                QueryOp::StationsForVehicle { vehicle_id } => assert_eq!(vehicle_id, 3),
                other => panic!("Unexpected op: {:?}", other),
            },
            other => panic!("Unexpected command: {:?}", other),
        }

        let args = Args::parse_from(["autopark", "query", "lacking-fuel", "--fuel", "A95"]);
        match args.get_command() {
            Commands::Query(query) => match query.op {
                QueryOp::LackingFuel { fuel_type } => assert_eq!(fuel_type, "A95"),
                other => panic!("Unexpected op: {:?}", other),
            },
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_adjust_negative_delta() {
        let args = Args::parse_from([
            "autopark", "adjust", "--depot", "1", "--delta", "-5",
        ]);
        match args.get_command() {
            Commands::Adjust(adjust) => {
                assert_eq!(adjust.depot_id, 1);
                assert_eq!(adjust.delta, -5);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let args = Args::parse_from(["autopark"]);
        assert!(args.command.is_none());
    }
}
