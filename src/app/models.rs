//! Data models for seismic station consolidation
//!
//! This module contains the core data structures for representing station
//! listing records, their identity, and each observed appearance of a station
//! across the input corpus.

use crate::constants::CHANNEL_CHECK_SENTINEL;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

// =============================================================================
// Station Identity
// =============================================================================

/// Identity of a physical station: (station code, network code)
///
/// Two records with the same key refer to the same station regardless of any
/// other text on their lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StationKey {
    pub station: String,
    pub network: String,
}

impl StationKey {
    pub fn new(station: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            network: network.into(),
        }
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.station, self.network)
    }
}

// =============================================================================
// Channel Code
// =============================================================================

/// Standardized instrument-channel code of a station
///
/// Inferred codes always denote the vertical component (third character `Z`).
/// Lines without a recognizable channel token carry the `CHECK` sentinel so
/// downstream consumers can grep for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChannelCode {
    /// Three-character code ending in `Z`, e.g. `BHZ`
    Vertical(String),
    /// No channel token was found on the line
    Unrecognized,
}

impl ChannelCode {
    /// Text written to registry files and reports
    pub fn as_str(&self) -> &str {
        match self {
            ChannelCode::Vertical(code) => code,
            ChannelCode::Unrecognized => CHANNEL_CHECK_SENTINEL,
        }
    }

    /// Whether this is the `CHECK` sentinel
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, ChannelCode::Unrecognized)
    }
}

impl From<Option<String>> for ChannelCode {
    fn from(code: Option<String>) -> Self {
        code.map_or(ChannelCode::Unrecognized, ChannelCode::Vertical)
    }
}

impl fmt::Display for ChannelCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ChannelCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// =============================================================================
// Station Records
// =============================================================================

/// One parsed station listing line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationRecord {
    /// Station code, original case preserved
    pub station_code: String,

    /// Network code
    pub network_code: String,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Elevation in kilometers (0.0 when the listing had none)
    pub elevation_km: f64,

    /// Standardized channel code inferred from the whole line
    pub channel_code: ChannelCode,
}

impl StationRecord {
    /// Deduplication identity of this record
    pub fn key(&self) -> StationKey {
        StationKey::new(&self.station_code, &self.network_code)
    }
}

/// One appearance of a station key in one file at one line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occurrence {
    /// Station listing the line came from
    pub source: PathBuf,

    /// 1-based line number within the source
    pub line_number: usize,

    pub latitude: f64,
    pub longitude: f64,
    pub elevation_km: f64,
    pub channel_code: ChannelCode,
}

impl Occurrence {
    /// Record an appearance of `record` at `source:line_number`
    pub fn new(source: impl Into<PathBuf>, line_number: usize, record: &StationRecord) -> Self {
        Self {
            source: source.into(),
            line_number,
            latitude: record.latitude,
            longitude: record.longitude,
            elevation_km: record.elevation_km,
            channel_code: record.channel_code.clone(),
        }
    }

    /// The (latitude, longitude) pair of this occurrence
    pub fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// A station line whose channel code could not be inferred
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelWarning {
    pub key: StationKey,
    pub source: PathBuf,
    pub line_number: usize,

    /// Trimmed line text, kept for the report
    pub content: String,
}

/// A station listing that could not be read
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}
