//! Tests for coordinate conflict detection and grouping

use super::*;
use crate::app::models::{Occurrence, StationKey};
use crate::app::services::station_registry::conflicts::{detect_conflict, distinct_locations};
use crate::app::services::station_registry::{ConflictPolicy, consolidate_lines};

fn occurrence_at(line_number: usize, lat: f64, lon: f64) -> Occurrence {
    Occurrence::new(
        "/data/rdseed.stations",
        line_number,
        &create_test_record("S", "N", lat, lon),
    )
}

#[test]
fn test_single_occurrence_never_conflicts() {
    let key = StationKey::new("S", "N");
    let occurrences = vec![occurrence_at(1, 10.0, 20.0)];

    assert!(detect_conflict(&key, &occurrences, &ConflictPolicy::default()).is_none());
}

#[test]
fn test_distinct_locations_use_exact_equality_by_default() {
    let occurrences = vec![
        occurrence_at(1, 10.0, 20.0),
        occurrence_at(2, 10.0, 20.0),
        occurrence_at(3, 10.000001, 20.0),
    ];

    let locations = distinct_locations(&occurrences, &ConflictPolicy::default());
    assert_eq!(locations, vec![(10.0, 20.0), (10.000001, 20.0)]);
}

#[test]
fn test_near_identical_pairs_conflict_but_group_together() {
    let key = StationKey::new("S", "N");
    let occurrences = vec![occurrence_at(1, 10.0, 20.0), occurrence_at(2, 10.000001, 20.0)];

    let conflict = detect_conflict(&key, &occurrences, &ConflictPolicy::default()).unwrap();

    assert_eq!(conflict.locations.len(), 2);
    assert_eq!(conflict.occurrence_count, 2);
    // Both occurrences fall within 1e-5 of both locations
    assert_eq!(conflict.locations[0].occurrences.len(), 2);
    assert_eq!(conflict.locations[1].occurrences.len(), 2);
}

#[test]
fn test_far_apart_locations_group_separately() {
    let key = StationKey::new("S", "N");
    let occurrences = vec![
        occurrence_at(1, 10.0, 20.0),
        occurrence_at(2, 11.0, 20.0),
        occurrence_at(3, 10.0, 20.0),
    ];

    let conflict = detect_conflict(&key, &occurrences, &ConflictPolicy::default()).unwrap();

    assert_eq!(conflict.locations.len(), 2);
    assert_eq!(conflict.locations[0].latitude, 10.0);
    let first_lines: Vec<usize> = conflict.locations[0]
        .occurrences
        .iter()
        .map(|occurrence| occurrence.line_number)
        .collect();
    assert_eq!(first_lines, vec![1, 3]);

    assert_eq!(conflict.locations[1].latitude, 11.0);
    assert_eq!(conflict.locations[1].occurrences.len(), 1);
    assert_eq!(conflict.locations[1].occurrences[0].line_number, 2);
}

#[test]
fn test_longitude_difference_alone_conflicts() {
    let key = StationKey::new("S", "N");
    let occurrences = vec![occurrence_at(1, 10.0, 20.0), occurrence_at(2, 10.0, -20.0)];

    assert!(detect_conflict(&key, &occurrences, &ConflictPolicy::default()).is_some());
}

#[test]
fn test_conflict_tolerance_suppresses_small_differences() {
    let policy = ConflictPolicy {
        conflict_tolerance: 1e-4,
        ..ConflictPolicy::default()
    };
    let key = StationKey::new("S", "N");
    let occurrences = vec![occurrence_at(1, 10.0, 20.0), occurrence_at(2, 10.00005, 20.0)];

    assert!(detect_conflict(&key, &occurrences, &policy).is_none());

    let far = vec![occurrence_at(1, 10.0, 20.0), occurrence_at(2, 10.5, 20.0)];
    assert!(detect_conflict(&key, &far, &policy).is_some());
}

#[test]
fn test_elevation_and_channel_differences_are_not_conflicts() {
    let source = Path::new("/data/rdseed.stations");
    let lines = source_lines(source, &["S N 10.0 20.0 100 BHZ", "S N 10.0 20.0 900 HHN"]);

    let result = consolidate_lines(lines, ConflictPolicy::default());
    assert!(result.conflicts.is_empty());
}

#[test]
fn test_conflicts_listed_in_first_seen_key_order() {
    let source = Path::new("/data/rdseed.stations");
    let lines = source_lines(
        source,
        &[
            "B N 1 1",
            "A N 1 1",
            "A N 2 2",
            "B N 3 3",
            "C N 5 5",
        ],
    );

    let result = consolidate_lines(lines, ConflictPolicy::default());
    let keys: Vec<String> = result
        .conflicts
        .iter()
        .map(|conflict| conflict.key.to_string())
        .collect();

    assert_eq!(keys, vec!["B.N", "A.N"]);
}
