//! Application constants for the seismic station registry
//!
//! This module contains file names, field layouts, the channel-code grammar
//! and numeric tolerances used throughout the consolidation pipeline.

// =============================================================================
// File Names and Defaults
// =============================================================================

/// Exact file name of the per-dataset station listings produced by rdseed
pub const STATION_FILE_NAME: &str = "rdseed.stations";

/// Default path of the consolidated station registry
pub const DEFAULT_OUTPUT_FILE: &str = "station.dat";

/// Default output path of the rename transform
pub const DEFAULT_RENAMED_FILE: &str = "station_renamed.dat";

/// Lines whose trimmed text starts with this character are comments
pub const COMMENT_PREFIX: char = '#';

// =============================================================================
// Station Listing Layout (rdseed.stations)
// =============================================================================

/// Field layout of an rdseed station listing line
///
/// `STATION NETWORK LAT LON [ELEVATION_M] [free text...]`
pub mod listing_fields {
    pub const STATION: usize = 0;
    pub const NETWORK: usize = 1;
    pub const LATITUDE: usize = 2;
    pub const LONGITUDE: usize = 3;
    pub const ELEVATION: usize = 4;

    /// Lines with fewer whitespace-separated fields are rejected
    pub const MIN_FIELDS: usize = 4;
}

/// Listing elevations are meters, the registry stores kilometers
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Elevation used when the listing has no parsable elevation field
pub const DEFAULT_ELEVATION_KM: f64 = 0.0;

// =============================================================================
// Registry File Layout (station.dat)
// =============================================================================

/// Field layout of a registry line as read by the rename transform
///
/// `LAT LON NETWORK STATION CHANNEL [ELEVATION_KM...]`
pub mod registry_fields {
    pub const LATITUDE: usize = 0;
    pub const LONGITUDE: usize = 1;
    pub const NETWORK: usize = 2;
    pub const STATION: usize = 3;
    pub const CHANNEL: usize = 4;

    /// Lines with fewer fields pass through the rename transform untouched
    pub const MIN_FIELDS: usize = 5;
}

/// Column widths of the fixed-width registry format
pub mod registry_widths {
    pub const COORDINATE: usize = 9;
    pub const COORDINATE_PRECISION: usize = 5;
    pub const NETWORK: usize = 4;
    pub const STATION: usize = 8;
    pub const CHANNEL: usize = 4;
    pub const ELEVATION: usize = 7;
    pub const ELEVATION_PRECISION: usize = 3;
}

// =============================================================================
// Channel Code Grammar
// =============================================================================

/// SEED channel naming: band code, instrument code, orientation code
pub mod channel_grammar {
    /// Band codes (E, H, B, L, S, M)
    pub const BAND_CODES: &[char] = &['E', 'H', 'B', 'L', 'S', 'M'];

    /// Instrument codes (H, L, N, D)
    pub const INSTRUMENT_CODES: &[char] = &['H', 'L', 'N', 'D'];

    /// Orientation codes (N, E, Z)
    pub const ORIENTATION_CODES: &[char] = &['N', 'E', 'Z'];

    /// Every standardized channel code denotes the vertical component
    pub const STANDARD_ORIENTATION: char = 'Z';

    /// Channel tokens are exactly three characters long
    pub const TOKEN_LENGTH: usize = 3;
}

/// Channel code written when no channel token could be inferred
pub const CHANNEL_CHECK_SENTINEL: &str = "CHECK";

// =============================================================================
// Coordinate Tolerances
// =============================================================================

/// Occurrences closer than this (degrees, both axes) are listed under the
/// same location in conflict reports
pub const LOCATION_GROUPING_EPSILON: f64 = 1e-5;

/// Conflict detection tolerance; zero means exact floating-point equality
pub const DEFAULT_CONFLICT_TOLERANCE: f64 = 0.0;

// =============================================================================
// Station Renaming
// =============================================================================

/// Length of the network prefix used for two-character station codes
pub const RENAME_NETWORK_PREFIX_LEN: usize = 2;
