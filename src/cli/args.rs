//! Command-line argument definitions for the seismic station tools
//!
//! Defines the CLI surface using the clap derive API: `consolidate` builds the
//! deduplicated registry, `rename` applies the network-qualified naming
//! convention and `clean` collapses column padding in a registry file.

use crate::config::{ConsolidationConfig, RenameConfig};
use crate::constants::{
    DEFAULT_CONFLICT_TOLERANCE, DEFAULT_OUTPUT_FILE, DEFAULT_RENAMED_FILE,
    LOCATION_GROUPING_EPSILON, STATION_FILE_NAME,
};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the seismic station consolidation tools
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seismic-stations",
    version,
    about = "Consolidate rdseed station listings into a deduplicated station registry",
    long_about = "Walks a directory tree of seismic datasets, collects every rdseed station \
                  listing, deduplicates stations by (station, network) identity and writes one \
                  canonical station file. Reports stations whose listings disagree on \
                  coordinates and lines whose channel code could not be recognized."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Build the deduplicated station registry from a dataset tree
    Consolidate(ConsolidateArgs),
    /// Prefix short station codes with their network code
    Rename(RenameArgs),
    /// Collapse whitespace runs in a registry file
    Clean(CleanArgs),
}

/// Arguments for the consolidate command
#[derive(Debug, Clone, Parser)]
pub struct ConsolidateArgs {
    /// Root directory to search recursively for station listings
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Path of the registry file to write
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = DEFAULT_OUTPUT_FILE,
        help = "Path of the registry file to write"
    )]
    pub output_path: PathBuf,

    /// Exact file name of the listings to collect
    #[arg(
        long = "file-name",
        value_name = "NAME",
        default_value = STATION_FILE_NAME,
        help = "File name of the station listings to collect"
    )]
    pub file_name: String,

    /// Coordinate difference (degrees) tolerated before two occurrences conflict
    ///
    /// Zero compares coordinates exactly.
    #[arg(
        long = "conflict-tolerance",
        value_name = "DEGREES",
        default_value_t = DEFAULT_CONFLICT_TOLERANCE,
        help = "Coordinate tolerance for conflict detection (0 = exact)"
    )]
    pub conflict_tolerance: f64,

    /// Tolerance (degrees) used to group occurrences in conflict reports
    #[arg(
        long = "grouping-epsilon",
        value_name = "DEGREES",
        default_value_t = LOCATION_GROUPING_EPSILON,
        help = "Tolerance for grouping occurrences in conflict reports"
    )]
    pub grouping_epsilon: f64,

    /// Keep the fixed-width column layout instead of collapsing whitespace
    #[arg(long = "keep-fixed-width", help = "Keep the fixed-width column layout")]
    pub keep_fixed_width: bool,

    /// Report format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the consolidation report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors and critical messages
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging and progress except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the rename command
#[derive(Debug, Clone, Parser)]
pub struct RenameArgs {
    /// Registry file to read
    #[arg(value_name = "INPUT", default_value = DEFAULT_OUTPUT_FILE)]
    pub input_path: PathBuf,

    /// Renamed registry file to write
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_RENAMED_FILE)]
    pub output_path: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Arguments for the clean command
#[derive(Debug, Clone, Parser)]
pub struct CleanArgs {
    /// Registry file to clean
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Write the cleaned text here instead of rewriting INPUT
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for the consolidation report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Map a `-v` count to a tracing level
fn log_level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

impl ConsolidateArgs {
    /// Validate the consolidate arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            return Err(Error::configuration(format!(
                "Root path does not exist: {}",
                self.root.display()
            )));
        }

        if !self.root.is_dir() {
            return Err(Error::configuration(format!(
                "Root path is not a directory: {}",
                self.root.display()
            )));
        }

        self.to_config().validate()
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            log_level_for(self.verbose)
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the consolidation settings these arguments describe
    pub fn to_config(&self) -> ConsolidationConfig {
        let mut config = ConsolidationConfig::default()
            .with_station_file_name(self.file_name.clone())
            .with_output_path(self.output_path.clone())
            .with_conflict_tolerance(self.conflict_tolerance)
            .with_grouping_epsilon(self.grouping_epsilon);

        if self.keep_fixed_width {
            config = config.without_cleanup();
        }
        if !self.show_progress() {
            config = config.without_progress();
        }
        config
    }
}

impl RenameArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level_for(self.verbose)
    }

    /// Build the rename settings these arguments describe
    pub fn to_config(&self) -> RenameConfig {
        RenameConfig::new(&self.input_path, &self.output_path)
    }
}

impl CleanArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level_for(self.verbose)
    }
}
