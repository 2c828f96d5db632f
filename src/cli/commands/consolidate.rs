//! Consolidate command implementation
//!
//! Discovers every station listing under the root, builds the deduplicated
//! registry, writes it and prints the consolidation report on stdout.

use super::report::{render_human_report, render_json_report};
use super::shared::setup_logging;
use crate::Result;
use crate::app::services::station_registry::{ConsolidationResult, consolidate_directory};
use crate::app::services::station_writer::{clean_station_file, write_station_file};
use crate::cli::args::{ConsolidateArgs, OutputFormat};
use colored::Colorize;
use tracing::{debug, info, warn};

/// Consolidate command runner
pub fn run_consolidate(args: ConsolidateArgs) -> Result<ConsolidationResult> {
    setup_logging(args.get_log_level(), args.quiet);

    info!("Starting station consolidation");
    debug!("Consolidate arguments: {:?}", args);

    args.validate()?;
    let config = args.to_config();

    if args.output_format == OutputFormat::Human && !args.quiet {
        println!(
            "{} {}",
            "Searching for station listings under".bright_yellow(),
            args.root.display()
        );
    }

    let result = consolidate_directory(&args.root, &config)?;
    if result.stats.has_file_failures() {
        warn!(
            "{} of {} station files could not be read",
            result.stats.files_failed,
            result.stats.files_read + result.stats.files_failed
        );
    }

    write_station_file(&config.output_path, result.registry.stations())?;
    if config.clean_output {
        clean_station_file(&config.output_path, None)?;
    }

    match args.output_format {
        OutputFormat::Human => print!("{}", render_human_report(&result, &config.output_path)),
        OutputFormat::Json => println!("{}", render_json_report(&result, &config.output_path)?),
    }

    info!(
        "Consolidation finished in {:.2}s",
        result.stats.load_duration.as_secs_f64()
    );
    Ok(result)
}
