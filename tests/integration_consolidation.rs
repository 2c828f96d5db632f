//! Integration tests for the station consolidation pipeline
//!
//! These tests build small dataset trees in temporary directories and drive
//! discovery, consolidation, registry output and renaming through the public
//! library API.

use seismic_stations::app::services::station_registry::consolidate_directory;
use seismic_stations::app::services::station_renamer::rename_station_file;
use seismic_stations::app::services::station_writer::{clean_station_file, write_station_file};
use seismic_stations::{ConsolidationConfig, Error, RenameConfig, StationKey};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write `contents` to `<root>/<dir>/rdseed.stations`
fn write_listing(root: &Path, dir: &str, contents: &str) -> PathBuf {
    let dir_path = root.join(dir);
    fs::create_dir_all(&dir_path).unwrap();
    let path = dir_path.join("rdseed.stations");
    fs::write(&path, contents).unwrap();
    path
}

fn quiet_config(output: &Path) -> ConsolidationConfig {
    ConsolidationConfig::default()
        .with_output_path(output)
        .without_progress()
}

/// Same station in two listings, channel tokens differ
///
/// Purpose: Validate first-seen-wins deduplication across files
/// Benefit: The registry keeps the first file's record while both occurrences stay reportable
#[test]
fn test_two_listings_with_same_station() {
    let temp_dir = TempDir::new().unwrap();
    write_listing(temp_dir.path(), "event_1", "STA1 NET1 10.00000 20.00000 100 BHZ\n");
    write_listing(temp_dir.path(), "event_2", "STA1 NET1 10.00000 20.00000 100 HHN\n");
    let output = temp_dir.path().join("station.dat");

    let result = consolidate_directory(temp_dir.path(), &quiet_config(&output)).unwrap();

    let key = StationKey::new("STA1", "NET1");
    assert_eq!(result.registry.station_count(), 1);
    assert!(result.conflicts.is_empty());
    let position = result.registry.position(&key).unwrap();
    assert_eq!(result.registry.stations()[position].channel_code.as_str(), "BHZ");
    assert_eq!(result.occurrences_for(&key).len(), 2);
    assert_eq!(result.stats.records_parsed, 2);
    assert_eq!(result.stats.files_read, 2);
}

/// Slightly moved station across listings
///
/// Purpose: Validate conflict detection and first-seen coordinates in the output file
/// Benefit: Disagreeing listings are surfaced without changing what gets written
#[test]
fn test_conflicting_coordinates_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_listing(
        temp_dir.path(),
        "a",
        "# rdseed station listing\nSTA1 NET1 10.0 20.0 1000 BHZ\nSTA2 NET2 -33.5 151.25\n",
    );
    let second = write_listing(temp_dir.path(), "b", "STA1 NET1 10.00001 20.0 1000 BHE\n");
    let output = temp_dir.path().join("station.dat");

    let result = consolidate_directory(temp_dir.path(), &quiet_config(&output)).unwrap();
    write_station_file(&output, result.registry.stations()).unwrap();
    clean_station_file(&output, None).unwrap();

    assert_eq!(result.conflicts.len(), 1);
    let conflict = &result.conflicts[0];
    assert_eq!(conflict.key, StationKey::new("STA1", "NET1"));
    assert_eq!(conflict.locations.len(), 2);
    assert_eq!(conflict.locations[0].latitude, 10.0);
    assert_eq!(conflict.locations[1].latitude, 10.00001);

    // Exactly different, yet within the grouping epsilon: both occurrences
    // are listed under each location
    for location in &conflict.locations {
        let sources: Vec<&PathBuf> = location
            .occurrences
            .iter()
            .map(|occurrence| &occurrence.source)
            .collect();
        assert_eq!(sources, vec![&first, &second]);
    }

    assert_eq!(result.channel_warnings.len(), 1);
    assert_eq!(result.channel_warnings[0].key, StationKey::new("STA2", "NET2"));
    assert_eq!(result.channel_warnings[0].line_number, 3);

    let range = result.coordinate_range().unwrap();
    assert_eq!(range.min_latitude, -33.5);
    assert_eq!(range.max_latitude, 10.0);

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "10.00000 20.00000 NET1 STA1 BHZ 1.000\n-33.50000 151.25000 NET2 STA2 CHECK 0.000\n"
    );
}

/// Tolerance-based conflict detection
///
/// Purpose: Validate the conflict tolerance extension
/// Benefit: Sub-tolerance jitter no longer produces conflict reports
#[test]
fn test_conflict_tolerance_suppresses_jitter() {
    let temp_dir = TempDir::new().unwrap();
    write_listing(temp_dir.path(), "a", "STA1 NET1 10.0 20.0\n");
    write_listing(temp_dir.path(), "b", "STA1 NET1 10.00001 20.0\n");
    let output = temp_dir.path().join("station.dat");

    let config = quiet_config(&output).with_conflict_tolerance(0.001);
    let result = consolidate_directory(temp_dir.path(), &config).unwrap();

    assert!(result.conflicts.is_empty());
}

/// Malformed lines and invalid bytes
///
/// Purpose: Validate lenient decoding and silent skipping of unparsable lines
/// Benefit: One damaged listing never blocks the rest of the corpus
#[test]
fn test_damaged_listing_is_recovered() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("damaged");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("rdseed.stations"),
        b"GOOD NET 1.0 2.0 0 BHZ\r\nBAD NET north 2.0\r\nSHORT NET 1.0\r\nU\xffTF NET 3.0 4.0 0 HHZ\r\n",
    )
    .unwrap();
    let output = temp_dir.path().join("station.dat");

    let result = consolidate_directory(temp_dir.path(), &quiet_config(&output)).unwrap();

    assert_eq!(result.registry.station_count(), 2);
    assert!(result.registry.contains_station(&StationKey::new("UTF", "NET")));
    assert_eq!(result.stats.records_parsed, 2);
    assert_eq!(result.stats.lines_rejected, 2);
}

/// Missing roots and empty trees are fatal
#[test]
fn test_fatal_conditions() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("station.dat");

    let missing = consolidate_directory(&temp_dir.path().join("absent"), &quiet_config(&output));
    assert!(matches!(missing, Err(Error::Configuration { .. })));

    let empty = consolidate_directory(temp_dir.path(), &quiet_config(&output));
    assert!(matches!(empty, Err(Error::NoStationFiles { .. })));
}

/// Consolidate, then rename the written registry
///
/// Purpose: Validate that the renamer reads the registry layout the writer produces
/// Benefit: The two entry points compose the way they are used in practice
#[test]
fn test_consolidate_then_rename() {
    let temp_dir = TempDir::new().unwrap();
    write_listing(
        temp_dir.path(),
        "event",
        "AB HE 39.0 116.0 0 BHZ\nABC BJ 40.0 117.0 0 BHZ\nABCDE TJ 41.0 118.0 0 BHZ\n",
    );
    let registry_path = temp_dir.path().join("station.dat");
    let renamed_path = temp_dir.path().join("station_renamed.dat");

    let result = consolidate_directory(temp_dir.path(), &quiet_config(&registry_path)).unwrap();
    write_station_file(&registry_path, result.registry.stations()).unwrap();

    let stats = rename_station_file(&RenameConfig::new(&registry_path, &renamed_path)).unwrap();

    assert_eq!(stats.stations_renamed, 2);
    assert_eq!(
        fs::read_to_string(&renamed_path).unwrap(),
        "39.00000 116.00000 HE HEAB BHZ 0.000\n\
         40.00000 117.00000 BJ BJABC BHZ 0.000\n\
         41.00000 118.00000 TJ ABCDE BHZ 0.000\n"
    );
}
