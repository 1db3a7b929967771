//! Command implementations for the autopark CLI
//!
//! This module contains the command execution logic and result rendering
//! for the CLI interface. Each command is implemented in its own module:
//! - `menu`: interactive query loop over the loaded tables
//! - `query`: one-shot query execution for scripting
//! - `adjust`: one-shot depot adjustment with persistence
//! - `show`: table dump and load report

pub mod adjust;
pub mod menu;
pub mod query;
pub mod shared;
pub mod show;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for autopark
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Menu(menu_args) => menu::run_menu(menu_args),
        Commands::Query(query_args) => query::run_query(query_args),
        Commands::Adjust(adjust_args) => adjust::run_adjust(adjust_args),
        Commands::Show(show_args) => show::run_show(show_args),
    }
}
