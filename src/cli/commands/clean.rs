//! Clean command implementation

use super::shared::setup_logging;
use crate::app::services::station_writer::clean_station_file;
use crate::cli::args::CleanArgs;
use crate::{Error, Result};
use colored::Colorize;

/// Clean command runner
pub fn run_clean(args: CleanArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false);

    if !args.input_path.is_file() {
        return Err(Error::file_not_found(args.input_path.display().to_string()));
    }

    clean_station_file(&args.input_path, args.output_path.as_deref())?;

    let written = args.output_path.as_ref().unwrap_or(&args.input_path);
    println!("{} {}", "Cleaned registry written to".bright_green(), written.display());
    Ok(())
}
