//! Rename command implementation

use super::shared::setup_logging;
use crate::Result;
use crate::app::services::station_renamer::{RenameStats, rename_station_file};
use crate::cli::args::RenameArgs;
use colored::Colorize;
use tracing::debug;

/// Rename command runner
pub fn run_rename(args: RenameArgs) -> Result<RenameStats> {
    setup_logging(args.get_log_level(), false);
    debug!("Rename arguments: {:?}", args);

    let config = args.to_config();
    let stats = rename_station_file(&config)?;

    println!(
        "{} {}",
        "Done! Renamed stations saved to".bright_green(),
        config.output_path.display()
    );
    Ok(stats)
}
