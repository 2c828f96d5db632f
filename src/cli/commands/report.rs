//! Consolidation report rendering
//!
//! The human report lists, in order: processing summary, coordinate range,
//! channel warnings, coordinate conflicts, the output path and the network
//! and channel distributions. The JSON report carries the same content.

use crate::app::models::{ChannelWarning, FileFailure};
use crate::app::services::station_registry::{
    ConsolidationResult, CoordinateRange, StationConflict,
};
use crate::{Error, Result};
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

const WIDE_RULE: usize = 80;
const SECTION_RULE: usize = 60;
const ENTRY_RULE: usize = 40;

/// Headline counters of a consolidation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub records_parsed: usize,
    pub unique_stations: usize,
    pub conflicting_stations: usize,
    pub unrecognized_channel_lines: usize,
    pub files_read: usize,
    pub files_failed: usize,
    pub lines_rejected: usize,
    pub non_finite_coordinates: usize,
}

impl ReportSummary {
    pub fn from_result(result: &ConsolidationResult) -> Self {
        Self {
            records_parsed: result.stats.records_parsed,
            unique_stations: result.registry.station_count(),
            conflicting_stations: result.conflicts.len(),
            unrecognized_channel_lines: result.channel_warnings.len(),
            files_read: result.stats.files_read,
            files_failed: result.stats.files_failed,
            lines_rejected: result.stats.lines_rejected,
            non_finite_coordinates: result.stats.non_finite_coordinates,
        }
    }
}

/// Machine-readable form of the consolidation report
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub summary: ReportSummary,
    pub coordinate_range: Option<CoordinateRange>,
    pub channel_warnings: &'a [ChannelWarning],
    pub conflicts: &'a [StationConflict],
    pub file_failures: &'a [FileFailure],
    pub output_path: &'a Path,
    pub network_distribution: BTreeMap<String, usize>,
    pub channel_distribution: BTreeMap<String, usize>,
}

impl<'a> JsonReport<'a> {
    pub fn new(result: &'a ConsolidationResult, output_path: &'a Path) -> Self {
        let statistics = result.statistics();
        Self {
            summary: ReportSummary::from_result(result),
            coordinate_range: result.coordinate_range(),
            channel_warnings: &result.channel_warnings,
            conflicts: &result.conflicts,
            file_failures: &result.file_failures,
            output_path,
            network_distribution: statistics.network_counts,
            channel_distribution: statistics.channel_counts,
        }
    }
}

/// Render the report as pretty-printed JSON
pub fn render_json_report(result: &ConsolidationResult, output_path: &Path) -> Result<String> {
    serde_json::to_string_pretty(&JsonReport::new(result, output_path))
        .map_err(|e| Error::serialization("Failed to serialize consolidation report", e))
}

/// Human-readable report, rendered through [`fmt::Display`]
pub struct HumanReport<'a> {
    result: &'a ConsolidationResult,
    output_path: &'a Path,
}

impl<'a> HumanReport<'a> {
    pub fn new(result: &'a ConsolidationResult, output_path: &'a Path) -> Self {
        Self {
            result,
            output_path,
        }
    }
}

impl fmt::Display for HumanReport<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;

        write_summary(out, &ReportSummary::from_result(result))?;
        write_coordinate_range(out, result.coordinate_range().as_ref())?;
        write_channel_warnings(out, &result.channel_warnings)?;
        write_conflicts(out, &result.conflicts)?;
        write_file_failures(out, &result.file_failures)?;
        writeln!(
            out,
            "\n{} {}",
            "Registry written to:".bright_green(),
            self.output_path.display()
        )?;
        write_distributions(out, result)
    }
}

/// Render the human-readable report
pub fn render_human_report(result: &ConsolidationResult, output_path: &Path) -> String {
    HumanReport::new(result, output_path).to_string()
}

fn write_summary(out: &mut fmt::Formatter<'_>, summary: &ReportSummary) -> fmt::Result {
    writeln!(out, "\n{}", "Processing Summary".bright_green().bold())?;
    writeln!(out, "  {} {}", "Station records parsed:".bright_cyan(), summary.records_parsed)?;
    writeln!(out, "  {} {}", "Unique stations:".bright_cyan(), summary.unique_stations)?;
    writeln!(
        out,
        "  {} {}",
        "Stations with conflicting coordinates:".bright_cyan(),
        summary.conflicting_stations
    )?;
    writeln!(
        out,
        "  {} {}",
        "Lines with unrecognized channel codes:".bright_cyan(),
        summary.unrecognized_channel_lines
    )?;
    writeln!(out, "  {} {}", "Files read:".bright_cyan(), summary.files_read)?;

    let failed = summary.files_failed.to_string();
    writeln!(
        out,
        "  {} {}",
        "Files failed:".bright_cyan(),
        if summary.files_failed > 0 { failed.bright_red() } else { failed.normal() }
    )?;
    writeln!(out, "  {} {}", "Lines rejected:".bright_cyan(), summary.lines_rejected)?;
    if summary.non_finite_coordinates > 0 {
        writeln!(
            out,
            "  {} {}",
            "Lines with NaN or infinite coordinates:".bright_cyan(),
            summary.non_finite_coordinates.to_string().bright_yellow()
        )?;
    }
    Ok(())
}

fn write_coordinate_range(out: &mut fmt::Formatter<'_>, range: Option<&CoordinateRange>) -> fmt::Result {
    let Some(range) = range else {
        return writeln!(
            out,
            "\n{}",
            "Cannot compute coordinate range - no valid station data".yellow()
        );
    };

    writeln!(out, "\n{}", "=".repeat(SECTION_RULE))?;
    writeln!(out, "{}", "Station Coordinate Range".bright_green().bold())?;
    writeln!(out, "{}", "=".repeat(SECTION_RULE))?;
    writeln!(
        out,
        "Latitude range:  {:.5}° ~ {:.5}°",
        range.min_latitude, range.max_latitude
    )?;
    writeln!(
        out,
        "Longitude range: {:.5}° ~ {:.5}°",
        range.min_longitude, range.max_longitude
    )?;
    writeln!(out, "Latitude span:   {:.5}°", range.latitude_span)?;
    writeln!(out, "Longitude span:  {:.5}°", range.longitude_span)?;
    writeln!(out, "{}", "=".repeat(SECTION_RULE))
}

fn write_channel_warnings(out: &mut fmt::Formatter<'_>, warnings: &[ChannelWarning]) -> fmt::Result {
    if warnings.is_empty() {
        return writeln!(
            out,
            "\n{}",
            "All station lines have a recognized channel code".bright_green()
        );
    }

    writeln!(out, "\n{}", "=".repeat(WIDE_RULE))?;
    writeln!(
        out,
        "{}",
        "Warning: channel code not recognized, marked as 'CHECK':"
            .bright_yellow()
            .bold()
    )?;
    writeln!(out, "{}", "=".repeat(WIDE_RULE))?;

    for warning in warnings {
        writeln!(out, "Station: {}", warning.key)?;
        writeln!(
            out,
            "  File: {} (line {})",
            warning.source.display(),
            warning.line_number
        )?;
        writeln!(out, "  Content: {}", warning.content)?;
        writeln!(out, "{}", "-".repeat(ENTRY_RULE))?;
    }

    writeln!(
        out,
        "\n{}",
        format!(
            "{} lines with unrecognized channel codes",
            warnings.len()
        )
        .bright_yellow()
    )
}

fn write_conflicts(out: &mut fmt::Formatter<'_>, conflicts: &[StationConflict]) -> fmt::Result {
    if conflicts.is_empty() {
        return writeln!(
            out,
            "\n{}",
            "No station has conflicting coordinates".bright_green()
        );
    }

    writeln!(out, "\n{}", "=".repeat(WIDE_RULE))?;
    writeln!(
        out,
        "{}",
        "Warning: stations listed with different coordinates:"
            .bright_yellow()
            .bold()
    )?;
    writeln!(out, "{}", "=".repeat(WIDE_RULE))?;

    for conflict in conflicts {
        writeln!(out, "\nStation: {}", conflict.key.to_string().bright_cyan())?;
        writeln!(out, "{} distinct locations:", conflict.locations.len())?;

        for (index, location) in conflict.locations.iter().enumerate() {
            writeln!(
                out,
                "  Location {}: latitude={:.5}, longitude={:.5}",
                index + 1,
                location.latitude,
                location.longitude
            )?;
            writeln!(out, "    Seen in:")?;
            for occurrence in &location.occurrences {
                writeln!(
                    out,
                    "      - {} (line {})",
                    occurrence.source.display(),
                    occurrence.line_number
                )?;
            }
        }
        writeln!(out, "{}", "-".repeat(SECTION_RULE))?;
    }

    writeln!(
        out,
        "\n{}",
        format!(
            "{} stations have inconsistent coordinates",
            conflicts.len()
        )
        .bright_yellow()
    )
}

fn write_file_failures(out: &mut fmt::Formatter<'_>, failures: &[FileFailure]) -> fmt::Result {
    if failures.is_empty() {
        return Ok(());
    }

    writeln!(out, "\n{}", "Unreadable station files:".bright_red().bold())?;
    for failure in failures {
        writeln!(out, "  {}: {}", failure.path.display(), failure.message)?;
    }
    Ok(())
}

fn write_distributions(out: &mut fmt::Formatter<'_>, result: &ConsolidationResult) -> fmt::Result {
    let statistics = result.statistics();

    writeln!(out, "\n{}", "Network distribution:".bright_green())?;
    for (network, count) in &statistics.network_counts {
        writeln!(out, "  {}: {} stations", network, count)?;
    }

    writeln!(out, "\n{}", "Channel distribution:".bright_green())?;
    for (channel, count) in &statistics.channel_counts {
        writeln!(out, "  {}: {} stations", channel, count)?;
    }
    Ok(())
}
