use clap::Parser;
use seismic_stations::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // anyhow's alternate form prints the whole source chain
    match commands::run(args).map_err(anyhow::Error::from) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Seismic Stations - rdseed station listing consolidation");
    println!("=======================================================");
    println!();
    println!("Collect rdseed.stations listings from a dataset tree, deduplicate");
    println!("stations by (station, network) and write one canonical station file.");
    println!();
    println!("USAGE:");
    println!("    seismic-stations <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    consolidate    Build the deduplicated station registry (main command)");
    println!("    rename         Prefix short station codes with their network code");
    println!("    clean          Collapse whitespace runs in a registry file");
    println!("    help           Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Consolidate every listing below a dataset root:");
    println!("    seismic-stations consolidate /path/to/datasets");
    println!();
    println!("    # Allow small coordinate differences and emit a JSON report:");
    println!("    seismic-stations consolidate /path/to/datasets --conflict-tolerance 0.001 \\");
    println!("                                 --format json");
    println!();
    println!("    # Rename station.dat into station_renamed.dat:");
    println!("    seismic-stations rename");
    println!();
    println!("For detailed help on any command, use:");
    println!("    seismic-stations <COMMAND> --help");
}
