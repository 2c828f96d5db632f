//! Network-qualified station renaming
//!
//! Rewrites the station code of every line of a consolidated registry file
//! (`LAT LON NETWORK STATION CHANNEL ...`) according to its length:
//!
//! - 2 characters: first two characters of the network + station (`HE`,`AB` → `HEAB`)
//! - 3 characters: whole network + station (`HE`,`ABC` → `HEABC`)
//! - anything else: unchanged
//!
//! The registry layout puts the network before the station, the reverse of the
//! rdseed listing layout, so this transform uses its own field positions.

use crate::app::services::station_registry::loader::split_lines;
use crate::config::RenameConfig;
use crate::constants::{RENAME_NETWORK_PREFIX_LEN, registry_fields};
use crate::{Error, Result};
use serde::Serialize;
use tracing::{debug, info};

/// New station code for `station` in `network`
pub fn rename_station_code(network: &str, station: &str) -> String {
    match station.chars().count() {
        2 => {
            let prefix: String = network.chars().take(RENAME_NETWORK_PREFIX_LEN).collect();
            format!("{}{}", prefix, station)
        }
        3 => format!("{}{}", network, station),
        _ => station.to_string(),
    }
}

/// A registry line rebuilt by [`rename_line`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedLine {
    /// Fields joined by single spaces, without terminator
    pub text: String,

    /// Whether the station code changed
    pub renamed: bool,
}

/// Rename the station field of one registry line
///
/// Returns `None` for lines that pass through untouched: blank lines and
/// lines with fewer than five fields. Renamed lines are rebuilt with single
/// spaces between fields and no terminator.
pub fn rename_line(line: &str) -> Option<RenamedLine> {
    if line.trim().is_empty() {
        return None;
    }

    let mut fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    if fields.len() < registry_fields::MIN_FIELDS {
        return None;
    }

    let station = rename_station_code(
        &fields[registry_fields::NETWORK],
        &fields[registry_fields::STATION],
    );
    let renamed = station != fields[registry_fields::STATION];
    fields[registry_fields::STATION] = station;

    Some(RenamedLine {
        text: fields.join(" "),
        renamed,
    })
}

/// Rename a sequence of registry lines
///
/// Pass-through lines are copied verbatim, terminator included. Each rebuilt
/// line is followed by a separate `"\n"` entry: the rebuilt text has lost its
/// own terminator, so concatenating the output restores one line break per
/// data line.
pub fn rename_stations<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    rename_and_count(lines).0
}

/// Renamed output and its counters, computed in one pass
fn rename_and_count<S: AsRef<str>>(lines: &[S]) -> (Vec<String>, RenameStats) {
    let mut output = Vec::with_capacity(lines.len() * 2);
    let mut stats = RenameStats {
        lines_read: lines.len(),
        ..RenameStats::default()
    };

    for line in lines {
        let line = line.as_ref();
        match rename_line(line) {
            Some(rebuilt) => {
                if rebuilt.renamed {
                    stats.stations_renamed += 1;
                } else {
                    stats.stations_unchanged += 1;
                }
                output.push(rebuilt.text);
                output.push("\n".to_string());
            }
            None => {
                stats.lines_passed_through += 1;
                output.push(line.to_string());
            }
        }
    }

    (output, stats)
}

/// Counters for one rename run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenameStats {
    /// Lines read from the input file
    pub lines_read: usize,

    /// Data lines whose station code changed
    pub stations_renamed: usize,

    /// Data lines whose station code was kept
    pub stations_unchanged: usize,

    /// Blank or short lines copied verbatim
    pub lines_passed_through: usize,
}

/// Rename every station in `config.input_path` into `config.output_path`
pub fn rename_station_file(config: &RenameConfig) -> Result<RenameStats> {
    config.validate()?;

    let input = &config.input_path;
    let text = std::fs::read_to_string(input)
        .map_err(|e| Error::io(format!("Failed to read {}", input.display()), e))?;

    let (output, stats) = rename_and_count(&lines_with_terminators(&text));
    std::fs::write(&config.output_path, output.concat()).map_err(|e| {
        Error::io(
            format!("Failed to write {}", config.output_path.display()),
            e,
        )
    })?;

    debug!("Rename statistics: {:?}", stats);
    info!(
        "Renamed {} stations from {} into {}",
        stats.stations_renamed,
        input.display(),
        config.output_path.display()
    );

    Ok(stats)
}

/// Split text into lines, each keeping a `\n` terminator if it had one
fn lines_with_terminators(text: &str) -> Vec<String> {
    let ends_with_terminator = text.ends_with(['\n', '\r']);
    let lines = split_lines(text);
    let last = lines.len().saturating_sub(1);

    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            if index < last || ends_with_terminator {
                format!("{}\n", line)
            } else {
                line.to_string()
            }
        })
        .collect()
}
