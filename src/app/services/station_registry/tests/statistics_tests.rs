//! Tests for registry statistics

use super::*;
use crate::app::services::station_registry::{ConflictPolicy, consolidate_lines};

#[test]
fn test_network_and_channel_counts() {
    let source = Path::new("/data/rdseed.stations");
    let lines = source_lines(
        source,
        &[
            "A XA 1 1 0 BHZ",
            "B XA 2 2 0 HHN",
            "C YB 3 3 0 BHE",
            "D YB 4 4 0",
            "A XA 1 1 0 LHZ",
        ],
    );

    let result = consolidate_lines(lines, ConflictPolicy::default());
    let statistics = result.statistics();

    assert_eq!(statistics.network_counts.len(), 2);
    assert_eq!(statistics.network_counts.get("XA"), Some(&2));
    assert_eq!(statistics.network_counts.get("YB"), Some(&2));
    assert_eq!(statistics.network_counts.get("ZZ"), None);

    assert_eq!(statistics.channel_counts.get("BHZ"), Some(&2));
    assert_eq!(statistics.channel_counts.get("HHZ"), Some(&1));
    assert_eq!(statistics.channel_counts.get("CHECK"), Some(&1));
    // Duplicates do not contribute their own channel
    assert_eq!(statistics.channel_counts.get("LHZ"), None);
}

#[test]
fn test_counts_are_sorted_by_code() {
    let source = Path::new("/data/rdseed.stations");
    let lines = source_lines(source, &["A ZZ 1 1", "B AA 1 1", "C MM 1 1"]);

    let result = consolidate_lines(lines, ConflictPolicy::default());
    let statistics = result.statistics();
    let networks: Vec<&str> = statistics.network_counts.keys().map(String::as_str).collect();

    assert_eq!(networks, vec!["AA", "MM", "ZZ"]);
}
