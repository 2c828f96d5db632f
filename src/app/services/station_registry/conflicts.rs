//! Coordinate conflict detection for duplicate station keys
//!
//! A station key is in conflict when its occurrences disagree on location.
//! Two tolerances are involved and they deliberately differ:
//!
//! - detection compares (latitude, longitude) pairs within
//!   `conflict_tolerance`, which defaults to zero, i.e. exact floating-point
//!   equality. `10.0` and `10.00001` are different locations.
//! - display grouping lists, for each distinct location, the occurrences
//!   strictly closer than `grouping_epsilon` (1e-5 degrees) on both axes.
//!
//! With the defaults, two nearly identical pairs raise a conflict yet may be
//! listed under the same location in the report.

use crate::app::models::{Occurrence, StationKey};
use crate::config::ConsolidationConfig;
use crate::constants::{DEFAULT_CONFLICT_TOLERANCE, LOCATION_GROUPING_EPSILON};
use serde::Serialize;

/// Tolerances applied when detecting and presenting conflicts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConflictPolicy {
    /// Pairs differing by at most this much on both axes are the same location
    pub conflict_tolerance: f64,

    /// Occurrences strictly closer than this are grouped under a location
    pub grouping_epsilon: f64,
}

impl Default for ConflictPolicy {
    fn default() -> Self {
        Self {
            conflict_tolerance: DEFAULT_CONFLICT_TOLERANCE,
            grouping_epsilon: LOCATION_GROUPING_EPSILON,
        }
    }
}

impl From<&ConsolidationConfig> for ConflictPolicy {
    fn from(config: &ConsolidationConfig) -> Self {
        Self {
            conflict_tolerance: config.conflict_tolerance,
            grouping_epsilon: config.grouping_epsilon,
        }
    }
}

impl ConflictPolicy {
    /// Whether two locations count as the same for conflict detection
    pub fn same_location(&self, a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() <= self.conflict_tolerance
            && (a.1 - b.1).abs() <= self.conflict_tolerance
    }

    /// Whether an occurrence is listed under a location in the report
    pub fn groups_with(&self, location: (f64, f64), occurrence: &Occurrence) -> bool {
        (occurrence.latitude - location.0).abs() < self.grouping_epsilon
            && (occurrence.longitude - location.1).abs() < self.grouping_epsilon
    }
}

/// A station key whose occurrences disagree on coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationConflict {
    pub key: StationKey,

    /// Distinct locations in first-seen order, each with its occurrences
    pub locations: Vec<ConflictLocation>,

    /// Total occurrences of the key
    pub occurrence_count: usize,
}

/// One distinct location of a conflicting station
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConflictLocation {
    pub latitude: f64,
    pub longitude: f64,

    /// Occurrences within the grouping epsilon of this location
    pub occurrences: Vec<Occurrence>,
}

/// Distinct (latitude, longitude) pairs in first-seen order
pub fn distinct_locations(occurrences: &[Occurrence], policy: &ConflictPolicy) -> Vec<(f64, f64)> {
    let mut locations: Vec<(f64, f64)> = Vec::new();
    for occurrence in occurrences {
        let location = occurrence.location();
        if !locations
            .iter()
            .any(|&known| policy.same_location(known, location))
        {
            locations.push(location);
        }
    }
    locations
}

/// Build the conflict entry for a key, if its occurrences disagree
///
/// Keys seen once can never conflict. An occurrence may be listed under more
/// than one location when it lies within the grouping epsilon of both.
pub fn detect_conflict(
    key: &StationKey,
    occurrences: &[Occurrence],
    policy: &ConflictPolicy,
) -> Option<StationConflict> {
    if occurrences.len() < 2 {
        return None;
    }

    let locations = distinct_locations(occurrences, policy);
    if locations.len() < 2 {
        return None;
    }

    let locations = locations
        .into_iter()
        .map(|(latitude, longitude)| ConflictLocation {
            latitude,
            longitude,
            occurrences: occurrences
                .iter()
                .filter(|occurrence| policy.groups_with((latitude, longitude), occurrence))
                .cloned()
                .collect(),
        })
        .collect();

    Some(StationConflict {
        key: key.clone(),
        locations,
        occurrence_count: occurrences.len(),
    })
}
