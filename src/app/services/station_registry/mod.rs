//! Station registry service: consolidation of station listings
//!
//! This module folds every parsed station listing line into a registry holding
//! one record per (station, network) key. The first occurrence of a key wins;
//! later occurrences are kept for conflict detection and reporting but never
//! replace the stored record.

use crate::app::models::{StationKey, StationRecord};
use std::collections::HashMap;

pub mod conflicts;
pub mod consolidator;
pub mod coordinate_range;
pub mod loader;
pub mod metadata;
pub mod statistics;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use conflicts::{ConflictLocation, ConflictPolicy, StationConflict};
pub use consolidator::{ConsolidationResult, SourceLine, StationConsolidator, consolidate_lines};
pub use coordinate_range::CoordinateRange;
pub use loader::{consolidate_directory, consolidate_files, discover_station_files};
pub use metadata::ConsolidationStats;
pub use statistics::RegistryStatistics;

/// Unique stations in first-seen order
///
/// Lookups by key are O(1); iteration follows the order in which keys were
/// first encountered across files and lines.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    /// Records in insertion order
    pub(crate) stations: Vec<StationRecord>,

    /// Position of each key in `stations`
    pub(crate) index: HashMap<StationKey, usize>,
}

impl StationRegistry {
    /// Create a new empty station registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` unless its key is already present
    ///
    /// Returns `true` when the record was stored.
    pub fn insert_if_absent(&mut self, record: StationRecord) -> bool {
        let key = record.key();
        if self.contains_station(&key) {
            return false;
        }

        self.index.insert(key, self.stations.len());
        self.stations.push(record);
        true
    }

    /// First-seen position of a key (O(1) lookup)
    pub fn position(&self, key: &StationKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Check if a station exists in the registry
    pub fn contains_station(&self, key: &StationKey) -> bool {
        self.index.contains_key(key)
    }

    /// Get the total number of stations in the registry
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// All stations in first-seen order
    pub fn stations(&self) -> &[StationRecord] {
        &self.stations
    }

    /// Keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = StationKey> + '_ {
        self.stations.iter().map(StationRecord::key)
    }
}
