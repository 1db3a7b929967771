//! One-shot depot adjustment command
//!
//! Applies a signed vehicle-count change to one depot and re-serializes the
//! whole depot table back to its source file.

use super::shared::{load_registry, resolve_config, setup_logging};
use crate::cli::args::AdjustArgs;
use crate::Result;
use colored::Colorize;
use tracing::info;

/// Adjust command runner
pub fn run_adjust(args: AdjustArgs) -> Result<()> {
    setup_logging(&args.data)?;

    let config = resolve_config(&args.data)?;
    let (mut registry, _stats) = load_registry(&config);

    info!("Adjusting depot {} by {}", args.depot_id, args.delta);

    let updated = registry.adjust_depot_cars(args.depot_id, args.delta)?;
    registry.save_depots(&config)?;

    println!(
        "Depot {} now houses {} vehicles",
        updated.id,
        updated.cars.to_string().green()
    );
    println!("Depot table saved to {}", config.depots_path().display());

    Ok(())
}
