//! Shared test utilities and fixtures for station registry tests

use crate::app::models::{ChannelCode, StationKey, StationRecord};
use crate::app::services::station_registry::{SourceLine, StationRegistry};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub mod conflict_tests;
pub mod statistics_tests;

/// Create a test station record with a vertical channel
pub fn create_test_record(station: &str, network: &str, lat: f64, lon: f64) -> StationRecord {
    StationRecord {
        station_code: station.to_string(),
        network_code: network.to_string(),
        latitude: lat,
        longitude: lon,
        elevation_km: 0.0,
        channel_code: ChannelCode::Vertical("BHZ".to_string()),
    }
}

/// The record the registry holds for `station.network`
pub fn stored_record<'a>(
    registry: &'a StationRegistry,
    station: &str,
    network: &str,
) -> &'a StationRecord {
    let position = registry
        .position(&StationKey::new(station, network))
        .unwrap_or_else(|| panic!("{}.{} is not in the registry", station, network));
    &registry.stations()[position]
}

/// Number `texts` as lines 1..=n of `source`
pub fn source_lines<'a>(source: &'a Path, texts: &[&'a str]) -> Vec<SourceLine<'a>> {
    texts
        .iter()
        .enumerate()
        .map(|(index, &text)| SourceLine {
            source,
            line_number: index + 1,
            text,
        })
        .collect()
}

/// Write a station listing at `relative_dir/rdseed.stations` below the temp root
pub fn create_station_file(
    temp_dir: &TempDir,
    relative_dir: &str,
    content: &str,
) -> std::io::Result<PathBuf> {
    let dir = temp_dir.path().join(relative_dir);
    fs::create_dir_all(&dir)?;

    let file_path = dir.join("rdseed.stations");
    fs::write(&file_path, content)?;
    Ok(file_path)
}
