//! Canonical station registry file output
//!
//! One line per unique station:
//!
//! ```text
//! <lat %9.5f> <lon %9.5f> <network :<4> <station :<8> <channel :<4> <elevation_km %7.3f>
//! ```
//!
//! A cleanup pass can then collapse the column padding to single spaces.

use crate::app::models::StationRecord;
use crate::app::services::station_registry::loader::split_lines;
use crate::constants::registry_widths::{
    CHANNEL, COORDINATE, COORDINATE_PRECISION, ELEVATION, ELEVATION_PRECISION, NETWORK, STATION,
};
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Format one registry line (without terminator)
pub fn format_station_line(station: &StationRecord) -> String {
    format!(
        "{:>cw$.cp$} {:>cw$.cp$} {:<nw$} {:<sw$} {:<chw$} {:>ew$.ep$}",
        station.latitude,
        station.longitude,
        station.network_code,
        station.station_code,
        station.channel_code.as_str(),
        station.elevation_km,
        cw = COORDINATE,
        cp = COORDINATE_PRECISION,
        nw = NETWORK,
        sw = STATION,
        chw = CHANNEL,
        ew = ELEVATION,
        ep = ELEVATION_PRECISION,
    )
}

/// Write the registry in fixed-width layout, one station per line
pub fn write_station_file(path: &Path, stations: &[StationRecord]) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);

    for station in stations {
        writeln!(writer, "{}", format_station_line(station))
            .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;
    }

    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", path.display()), e))?;

    info!("Wrote {} stations to {}", stations.len(), path.display());
    Ok(())
}

/// Collapse whitespace runs to single spaces and trim every line
///
/// Lines may end in `\n`, `\r\n` or a lone `\r`. Every output line, blank
/// ones included, ends with `\n`. Applying the cleanup twice gives the same
/// text as applying it once.
pub fn clean_text(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for line in split_lines(text) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        cleaned.push_str(&fields.join(" "));
        cleaned.push('\n');
    }
    cleaned
}

/// Rewrite `input` with [`clean_text`], in place when `output` is `None`
pub fn clean_station_file(input: &Path, output: Option<&Path>) -> Result<()> {
    let output = output.unwrap_or(input);

    let text = std::fs::read_to_string(input)
        .map_err(|e| Error::io(format!("Failed to read {}", input.display()), e))?;
    std::fs::write(output, clean_text(&text))
        .map_err(|e| Error::io(format!("Failed to write {}", output.display()), e))?;

    debug!("Cleaned {} into {}", input.display(), output.display());
    Ok(())
}
