use autopark::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Autopark - Fleet, Fuel Station and Depot Record Explorer");
    println!("=========================================================");
    println!();
    println!("Load vehicle, fuel station and depot tables from whitespace-delimited");
    println!("record files, answer queries over them, and adjust depot vehicle counts.");
    println!();
    println!("USAGE:");
    println!("    autopark <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    menu        Interactive numbered menu over the loaded tables (main command)");
    println!("    query       Run a single read-only query and print the result");
    println!("    adjust      Adjust a depot's vehicle count and save the depot table");
    println!("    show        Display the loaded tables and load statistics");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Start the interactive menu against the default data directory:");
    println!("    autopark menu");
    println!();
    println!("    # Query against a specific data directory:");
    println!("    autopark query --data-dir /path/to/records max-served");
    println!("    autopark query lacking-fuel --fuel A95 --format json");
    println!();
    println!("    # Dispatch three vehicles from depot 2 and save the table:");
    println!("    autopark adjust --depot 2 --delta -3");
    println!();
    println!("    # Get help for specific commands:");
    println!("    autopark query --help");
    println!("    autopark adjust --help");
    println!();
    println!("For detailed help on any command, use:");
    println!("    autopark <COMMAND> --help");
}
