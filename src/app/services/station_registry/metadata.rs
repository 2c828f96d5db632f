//! Consolidation run statistics
//!
//! Counters tracked while folding station listings into the registry.

use serde::Serialize;

/// Statistics about a consolidation pass
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConsolidationStats {
    /// Number of station listing files read successfully
    pub files_read: usize,

    /// Number of station listing files that could not be read
    pub files_failed: usize,

    /// Number of lines parsed into station records (duplicates included)
    pub records_parsed: usize,

    /// Number of data lines rejected by the parser
    pub lines_rejected: usize,

    /// Number of blank and comment lines skipped before parsing
    pub lines_ignored: usize,

    /// Rejected lines whose coordinates were NaN or infinite
    pub non_finite_coordinates: usize,

    /// Time taken by the pass
    #[serde(skip)]
    pub load_duration: std::time::Duration,
}

impl ConsolidationStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of data lines (blank/comment excluded) that parsed, as a percentage
    pub fn parse_rate(&self) -> f64 {
        let data_lines = self.records_parsed + self.lines_rejected;
        if data_lines == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / data_lines as f64) * 100.0
        }
    }

    /// Check if any file failed to load
    pub fn has_file_failures(&self) -> bool {
        self.files_failed > 0
    }

    /// Get a summary string of the pass
    pub fn summary(&self) -> String {
        format!(
            "Read {} files ({} failed), parsed {} records ({:.1}% of data lines) in {:.2}s",
            self.files_read,
            self.files_failed,
            self.records_parsed,
            self.parse_rate(),
            self.load_duration.as_secs_f64()
        )
    }
}
