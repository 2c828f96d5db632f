//! Configuration management and validation.
//!
//! Provides configuration structures for the consolidation pass and the
//! station rename transform, with defaults matching the conventional
//! rdseed station layout.

use crate::constants::{
    DEFAULT_CONFLICT_TOLERANCE, DEFAULT_OUTPUT_FILE, DEFAULT_RENAMED_FILE,
    LOCATION_GROUPING_EPSILON, STATION_FILE_NAME,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Settings for a consolidation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationConfig {
    /// Exact file name of the station listings to collect
    pub station_file_name: String,

    /// Path of the canonical registry file to write
    pub output_path: PathBuf,

    /// Tolerance (degrees) for grouping occurrences under a location when
    /// reporting conflicts
    pub grouping_epsilon: f64,

    /// Tolerance (degrees) for deciding that two occurrences disagree.
    /// Zero means bit-for-bit floating-point equality.
    pub conflict_tolerance: f64,

    /// Collapse whitespace runs in the written registry file
    pub clean_output: bool,

    /// Display a progress bar while reading station files
    pub show_progress: bool,
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            station_file_name: STATION_FILE_NAME.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            grouping_epsilon: LOCATION_GROUPING_EPSILON,
            conflict_tolerance: DEFAULT_CONFLICT_TOLERANCE,
            clean_output: true,
            show_progress: true,
        }
    }
}

impl ConsolidationConfig {
    /// Set the station listing file name
    pub fn with_station_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.station_file_name = file_name.into();
        self
    }

    /// Set the registry output path
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Set the display grouping tolerance
    pub fn with_grouping_epsilon(mut self, epsilon: f64) -> Self {
        self.grouping_epsilon = epsilon;
        self
    }

    /// Set the conflict detection tolerance
    pub fn with_conflict_tolerance(mut self, tolerance: f64) -> Self {
        self.conflict_tolerance = tolerance;
        self
    }

    /// Keep the fixed-width column layout in the written registry
    pub fn without_cleanup(mut self) -> Self {
        self.clean_output = false;
        self
    }

    /// Disable the progress bar
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Check the configuration for values the pipeline cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.station_file_name.trim().is_empty() {
            return Err(Error::configuration(
                "Station file name cannot be empty".to_string(),
            ));
        }

        if self.station_file_name.contains(['/', '\\']) {
            return Err(Error::configuration(format!(
                "Station file name must be a bare file name, got '{}'",
                self.station_file_name
            )));
        }

        if !self.grouping_epsilon.is_finite() || self.grouping_epsilon < 0.0 {
            return Err(Error::configuration(format!(
                "Grouping epsilon must be a non-negative number, got {}",
                self.grouping_epsilon
            )));
        }

        if !self.conflict_tolerance.is_finite() || self.conflict_tolerance < 0.0 {
            return Err(Error::configuration(format!(
                "Conflict tolerance must be a non-negative number, got {}",
                self.conflict_tolerance
            )));
        }

        debug!("Consolidation configuration validated: {:?}", self);
        Ok(())
    }
}

/// Settings for the station rename transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameConfig {
    /// Registry file to read
    pub input_path: PathBuf,

    /// Renamed registry file to write
    pub output_path: PathBuf,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            output_path: PathBuf::from(DEFAULT_RENAMED_FILE),
        }
    }
}

impl RenameConfig {
    /// Create a rename configuration for an explicit input/output pair
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Check that the input exists and differs from the output
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::file_not_found(self.input_path.display().to_string()));
        }

        if self.input_path == self.output_path {
            return Err(Error::configuration(format!(
                "Rename output must differ from its input: {}",
                self.input_path.display()
            )));
        }

        Ok(())
    }
}
