//! Geographic extent of the unique stations

use crate::app::models::StationRecord;
use serde::Serialize;

/// Bounding box of station coordinates in decimal degrees
///
/// Flat min/max over latitude and longitude; no wrap-around at the
/// antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinateRange {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub latitude_span: f64,
    pub longitude_span: f64,
}

impl CoordinateRange {
    /// Compute the range over `stations`
    ///
    /// Returns `None` for an empty input so "no data" stays distinct from a
    /// single-point range with zero spans.
    pub fn from_stations<'a>(stations: impl IntoIterator<Item = &'a StationRecord>) -> Option<Self> {
        let mut stations = stations.into_iter();
        let first = stations.next()?;

        let mut min_latitude = first.latitude;
        let mut max_latitude = first.latitude;
        let mut min_longitude = first.longitude;
        let mut max_longitude = first.longitude;

        for station in stations {
            min_latitude = min_latitude.min(station.latitude);
            max_latitude = max_latitude.max(station.latitude);
            min_longitude = min_longitude.min(station.longitude);
            max_longitude = max_longitude.max(station.longitude);
        }

        Some(Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
            latitude_span: max_latitude - min_latitude,
            longitude_span: max_longitude - min_longitude,
        })
    }
}
