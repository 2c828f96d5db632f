//! Seismic Station Registry Library
//!
//! Consolidates seismic station metadata scattered across many per-dataset
//! `rdseed.stations` listings into a single deduplicated registry.
//!
//! This library provides tools for:
//! - Inferring standardized instrument-channel codes from free-form line text
//! - Parsing station listing lines into structured records
//! - Deduplicating stations by (station, network) identity, first seen wins
//! - Detecting stations whose occurrences disagree on coordinates
//! - Computing the geographic bounding box and per-network/per-channel counts
//! - Writing the canonical fixed-width station file
//! - Renaming station codes into a network-qualified convention

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod channel_code;
        pub mod record_parser;
        pub mod station_registry;
        pub mod station_renamer;
        pub mod station_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ChannelCode, Occurrence, StationKey, StationRecord};
pub use config::{ConsolidationConfig, RenameConfig};

/// Result type alias for station registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for station registry operations
///
/// Only conditions that end a run are represented here. Unreadable station
/// files, rejected lines, unrecognized channels and coordinate conflicts are
/// recorded in the consolidation result instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// No station listing files below the search root
    #[error("No '{file_name}' files found under {root}")]
    NoStationFiles { root: String, file_name: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Report serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create a no-station-files error
    pub fn no_station_files(root: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self::NoStationFiles {
            root: root.into(),
            file_name: file_name.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
