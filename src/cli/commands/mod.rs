//! Command implementations for the seismic station CLI
//!
//! Each command lives in its own module:
//! - `consolidate`: registry consolidation with the full report
//! - `rename`: network-qualified station renaming
//! - `clean`: whitespace cleanup of a registry file

pub mod clean;
pub mod consolidate;
pub mod rename;
pub mod report;
pub mod shared;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Dispatch to the handler of the parsed subcommand
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Consolidate(consolidate_args)) => {
            consolidate::run_consolidate(consolidate_args).map(|_| ())
        }
        Some(Commands::Rename(rename_args)) => rename::run_rename(rename_args).map(|_| ()),
        Some(Commands::Clean(clean_args)) => clean::run_clean(clean_args),
        None => Err(Error::configuration("No command given".to_string())),
    }
}
