//! Deduplication and conflict engine
//!
//! [`StationConsolidator`] is an explicit accumulator: feed it every listing
//! line (or parsed record) in discovery order, then call
//! [`StationConsolidator::finish`] to obtain the registry, the conflict
//! report and the channel warnings. It touches no filesystem state, so the
//! whole engine can be driven from memory.

use super::StationRegistry;
use super::conflicts::{ConflictPolicy, StationConflict, detect_conflict};
use super::coordinate_range::CoordinateRange;
use super::metadata::ConsolidationStats;
use super::statistics::RegistryStatistics;
use crate::app::models::{ChannelWarning, FileFailure, Occurrence, StationKey, StationRecord};
use crate::app::services::record_parser::{
    ParseOutcome, RejectReason, is_ignorable_line, parse_station_line,
};
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, trace, warn};

/// One raw line handed to the engine by file discovery
#[derive(Debug, Clone, Copy)]
pub struct SourceLine<'a> {
    pub source: &'a Path,

    /// 1-based line number within `source`
    pub line_number: usize,

    pub text: &'a str,
}

/// Accumulator for a single consolidation pass
#[derive(Debug)]
pub struct StationConsolidator {
    policy: ConflictPolicy,
    registry: StationRegistry,
    occurrences: HashMap<StationKey, Vec<Occurrence>>,
    channel_warnings: Vec<ChannelWarning>,
    file_failures: Vec<FileFailure>,
    stats: ConsolidationStats,
    start_time: Instant,
}

impl Default for StationConsolidator {
    fn default() -> Self {
        Self::new(ConflictPolicy::default())
    }
}

impl StationConsolidator {
    /// Create an empty accumulator using `policy` for conflict detection
    pub fn new(policy: ConflictPolicy) -> Self {
        Self {
            policy,
            registry: StationRegistry::new(),
            occurrences: HashMap::new(),
            channel_warnings: Vec::new(),
            file_failures: Vec::new(),
            stats: ConsolidationStats::new(),
            start_time: Instant::now(),
        }
    }

    /// Feed one raw listing line
    ///
    /// Blank and comment lines are skipped, unparsable lines are counted and
    /// dropped, everything else goes through [`Self::ingest_record`].
    pub fn ingest_line(&mut self, line: SourceLine<'_>) {
        if is_ignorable_line(line.text) {
            self.stats.lines_ignored += 1;
            return;
        }

        match parse_station_line(line.text) {
            ParseOutcome::Parsed(record) => {
                self.ingest_record(line.source, line.line_number, record, line.text.trim())
            }
            ParseOutcome::Rejected(RejectReason::NonFiniteCoordinate) => {
                self.stats.lines_rejected += 1;
                self.stats.non_finite_coordinates += 1;
                debug!(
                    "Skipping {}:{}: {}",
                    line.source.display(),
                    line.line_number,
                    RejectReason::NonFiniteCoordinate
                );
            }
            ParseOutcome::Rejected(reason) => {
                self.stats.lines_rejected += 1;
                trace!(
                    "Skipping {}:{}: {}",
                    line.source.display(),
                    line.line_number,
                    reason
                );
            }
        }
    }

    /// Feed one parsed record
    ///
    /// Every record becomes an occurrence of its key. The registry keeps the
    /// first record seen for each key; later ones never replace it.
    pub fn ingest_record(
        &mut self,
        source: &Path,
        line_number: usize,
        record: StationRecord,
        content: &str,
    ) {
        self.stats.records_parsed += 1;
        let key = record.key();

        if record.channel_code.is_unrecognized() {
            self.channel_warnings.push(ChannelWarning {
                key: key.clone(),
                source: source.to_path_buf(),
                line_number,
                content: content.to_string(),
            });
        }

        self.occurrences
            .entry(key)
            .or_default()
            .push(Occurrence::new(source, line_number, &record));

        self.registry.insert_if_absent(record);
    }

    /// Count a station listing that was read in full
    pub fn record_file_read(&mut self, path: &Path) {
        self.stats.files_read += 1;
        debug!("Consolidated station file {}", path.display());
    }

    /// Record a station listing that could not be read
    pub fn record_file_failure(&mut self, path: &Path, message: impl Into<String>) {
        let message = message.into();
        warn!("Failed to read station file {}: {}", path.display(), message);

        self.stats.files_failed += 1;
        self.file_failures.push(FileFailure {
            path: path.to_path_buf(),
            message,
        });
    }

    /// Number of unique stations so far
    pub fn station_count(&self) -> usize {
        self.registry.station_count()
    }

    /// Close the pass and detect conflicts across all occurrences
    pub fn finish(mut self) -> ConsolidationResult {
        let mut occurrences = Vec::with_capacity(self.registry.station_count());
        let mut conflicts = Vec::new();

        // Registry order is first-seen order of keys
        for key in self.registry.keys() {
            let key_occurrences = self.occurrences.remove(&key).unwrap_or_default();
            if let Some(conflict) = detect_conflict(&key, &key_occurrences, &self.policy) {
                conflicts.push(conflict);
            }
            occurrences.push((key, key_occurrences));
        }

        self.stats.load_duration = self.start_time.elapsed();

        info!(
            "Consolidation complete: {} records, {} unique stations, {} conflicts, {} channel warnings",
            self.stats.records_parsed,
            self.registry.station_count(),
            conflicts.len(),
            self.channel_warnings.len()
        );

        ConsolidationResult {
            registry: self.registry,
            occurrences,
            conflicts,
            channel_warnings: self.channel_warnings,
            file_failures: self.file_failures,
            stats: self.stats,
        }
    }
}

/// Everything a consolidation pass produced
#[derive(Debug, Clone)]
pub struct ConsolidationResult {
    /// One record per station key, first seen wins
    pub registry: StationRegistry,

    /// Every occurrence, grouped by key in registry order
    pub occurrences: Vec<(StationKey, Vec<Occurrence>)>,

    /// Keys whose occurrences disagree on coordinates
    pub conflicts: Vec<StationConflict>,

    /// Occurrences whose channel code fell back to `CHECK`
    pub channel_warnings: Vec<ChannelWarning>,

    /// Station listings that could not be read
    pub file_failures: Vec<FileFailure>,

    pub stats: ConsolidationStats,
}

impl ConsolidationResult {
    /// Bounding box over unique stations; `None` when there are none
    pub fn coordinate_range(&self) -> Option<CoordinateRange> {
        CoordinateRange::from_stations(self.registry.stations())
    }

    /// Per-network and per-channel counts over unique stations
    pub fn statistics(&self) -> RegistryStatistics {
        RegistryStatistics::from_registry(&self.registry)
    }

    /// Every occurrence recorded for `key`
    ///
    /// `occurrences` follows registry order, so the registry index locates
    /// the entry directly.
    pub fn occurrences_for(&self, key: &StationKey) -> &[Occurrence] {
        self.registry
            .position(key)
            .and_then(|position| self.occurrences.get(position))
            .map(|(_, occurrences)| occurrences.as_slice())
            .unwrap_or(&[])
    }
}

/// Run the engine over an in-memory line stream
pub fn consolidate_lines<'a>(
    lines: impl IntoIterator<Item = SourceLine<'a>>,
    policy: ConflictPolicy,
) -> ConsolidationResult {
    let mut consolidator = StationConsolidator::new(policy);
    for line in lines {
        consolidator.ingest_line(line);
    }
    consolidator.finish()
}
