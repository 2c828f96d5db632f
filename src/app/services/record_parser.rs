//! Station listing line parsing
//!
//! Converts one line of an `rdseed.stations` listing into a [`StationRecord`].
//! Parsing never fails the run: every decision is returned as a
//! [`ParseOutcome`] so callers can count or log rejections as they see fit.

use crate::app::models::StationRecord;
use crate::app::services::channel_code::channel_code_for_line;
use crate::constants::{
    COMMENT_PREFIX, DEFAULT_ELEVATION_KM, METERS_PER_KILOMETER, listing_fields,
};
use std::fmt;

/// Result of parsing a single listing line
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Parsed(StationRecord),
    Rejected(RejectReason),
}

/// Why a listing line was not turned into a record
#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    /// Fewer than the minimum number of whitespace-separated fields
    TooFewFields { found: usize },
    /// Latitude field is not a number
    InvalidLatitude(String),
    /// Longitude field is not a number
    InvalidLongitude(String),
    /// Coordinate parsed to NaN or infinity
    NonFiniteCoordinate,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::TooFewFields { found } => write!(
                f,
                "expected at least {} fields, found {}",
                listing_fields::MIN_FIELDS,
                found
            ),
            RejectReason::InvalidLatitude(value) => write!(f, "invalid latitude '{}'", value),
            RejectReason::InvalidLongitude(value) => write!(f, "invalid longitude '{}'", value),
            RejectReason::NonFiniteCoordinate => write!(f, "coordinate is not finite"),
        }
    }
}

/// Whether a line carries no station data at all (blank or comment)
///
/// Such lines are skipped before parsing and count neither as parsed nor as
/// rejected.
pub fn is_ignorable_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX)
}

/// Parse one station listing line
///
/// Layout: `STATION NETWORK LAT LON [ELEVATION_M] [anything...]`. The elevation
/// is optional and falls back to 0 km when missing or unparsable. The channel
/// code is inferred from the whole original line, so annotations anywhere on
/// it can supply the channel.
pub fn parse_station_line(line: &str) -> ParseOutcome {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < listing_fields::MIN_FIELDS {
        return ParseOutcome::Rejected(RejectReason::TooFewFields {
            found: fields.len(),
        });
    }

    let latitude_str = fields[listing_fields::LATITUDE];
    let Ok(latitude) = latitude_str.parse::<f64>() else {
        return ParseOutcome::Rejected(RejectReason::InvalidLatitude(latitude_str.to_string()));
    };

    let longitude_str = fields[listing_fields::LONGITUDE];
    let Ok(longitude) = longitude_str.parse::<f64>() else {
        return ParseOutcome::Rejected(RejectReason::InvalidLongitude(longitude_str.to_string()));
    };

    if !latitude.is_finite() || !longitude.is_finite() {
        return ParseOutcome::Rejected(RejectReason::NonFiniteCoordinate);
    }

    let elevation_km = fields
        .get(listing_fields::ELEVATION)
        .and_then(|value| value.parse::<f64>().ok())
        .map_or(DEFAULT_ELEVATION_KM, |meters| meters / METERS_PER_KILOMETER);

    ParseOutcome::Parsed(StationRecord {
        station_code: fields[listing_fields::STATION].to_string(),
        network_code: fields[listing_fields::NETWORK].to_string(),
        latitude,
        longitude,
        elevation_km,
        channel_code: channel_code_for_line(line),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::ChannelCode;

    fn parsed(line: &str) -> StationRecord {
        match parse_station_line(line) {
            ParseOutcome::Parsed(record) => record,
            ParseOutcome::Rejected(reason) => panic!("Expected record, rejected: {}", reason),
        }
    }

    #[test]
    fn test_parse_full_line() {
        let record = parsed("STA1 NET1 10.00000 20.00000 100 BHZ");

        assert_eq!(record.station_code, "STA1");
        assert_eq!(record.network_code, "NET1");
        assert_eq!(record.latitude, 10.0);
        assert_eq!(record.longitude, 20.0);
        assert_eq!(record.elevation_km, 0.1);
        assert_eq!(record.channel_code, ChannelCode::Vertical("BHZ".to_string()));
    }

    #[test]
    fn test_parse_minimal_line_defaults() {
        let record = parsed("AB HE -33.5 151.25");

        assert_eq!(record.latitude, -33.5);
        assert_eq!(record.longitude, 151.25);
        assert_eq!(record.elevation_km, 0.0);
        assert_eq!(record.channel_code, ChannelCode::Unrecognized);
    }

    #[test]
    fn test_unparsable_elevation_falls_back_to_zero() {
        let record = parsed("AB HE 1.0 2.0 n/a HHN");

        assert_eq!(record.elevation_km, 0.0);
        assert_eq!(record.channel_code, ChannelCode::Vertical("HHZ".to_string()));
    }

    #[test]
    fn test_negative_elevation_converted() {
        let record = parsed("AB HE 1.0 2.0 -250");
        assert_eq!(record.elevation_km, -0.25);
    }

    #[test]
    fn test_arbitrary_whitespace_between_fields() {
        let record = parsed("  AB\tHE   1.5 \t 2.5   1500  ");

        assert_eq!(record.station_code, "AB");
        assert_eq!(record.network_code, "HE");
        assert_eq!(record.elevation_km, 1.5);
    }

    #[test]
    fn test_reject_too_few_fields() {
        assert_eq!(
            parse_station_line("AB HE 1.0"),
            ParseOutcome::Rejected(RejectReason::TooFewFields { found: 3 })
        );
    }

    #[test]
    fn test_reject_bad_coordinates() {
        assert_eq!(
            parse_station_line("AB HE north 2.0"),
            ParseOutcome::Rejected(RejectReason::InvalidLatitude("north".to_string()))
        );
        assert_eq!(
            parse_station_line("AB HE 1.0 east"),
            ParseOutcome::Rejected(RejectReason::InvalidLongitude("east".to_string()))
        );
        assert_eq!(
            parse_station_line("AB HE NaN 2.0"),
            ParseOutcome::Rejected(RejectReason::NonFiniteCoordinate)
        );
    }

    #[test]
    fn test_channel_comes_from_whole_line() {
        let record = parsed("AB HE 1.0 2.0 100 some note about LHE sensor");
        assert_eq!(record.channel_code, ChannelCode::Vertical("LHZ".to_string()));
    }

    #[test]
    fn test_reparse_reconstructed_line_is_stable() {
        let original = parsed("STA1 NET1 10.12345 -20.5 250 BHZ");
        let rebuilt = format!(
            "{} {} {} {} {} {}",
            original.station_code,
            original.network_code,
            original.latitude,
            original.longitude,
            original.elevation_km * 1000.0,
            original.channel_code
        );

        assert_eq!(parsed(&rebuilt), original);
    }

    #[test]
    fn test_ignorable_lines() {
        assert!(is_ignorable_line(""));
        assert!(is_ignorable_line("   \t"));
        assert!(is_ignorable_line("# station listing"));
        assert!(is_ignorable_line("   #indented comment"));
        assert!(!is_ignorable_line("AB HE 1.0 2.0"));
    }
}
