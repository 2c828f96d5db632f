//! Per-network and per-channel station counts

use super::StationRegistry;
use serde::Serialize;
use std::collections::BTreeMap;

/// Distribution of unique stations over networks and channel codes
///
/// Maps are ordered by code, which is the order the report lists them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegistryStatistics {
    pub network_counts: BTreeMap<String, usize>,
    pub channel_counts: BTreeMap<String, usize>,
}

impl RegistryStatistics {
    /// Count the registry's stations by network and by channel code
    pub fn from_registry(registry: &StationRegistry) -> Self {
        let mut statistics = Self::default();

        for station in registry.stations() {
            *statistics
                .network_counts
                .entry(station.network_code.clone())
                .or_default() += 1;
            *statistics
                .channel_counts
                .entry(station.channel_code.as_str().to_string())
                .or_default() += 1;
        }

        statistics
    }
}
