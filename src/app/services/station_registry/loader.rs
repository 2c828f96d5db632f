//! Station listing discovery and loading
//!
//! This module walks a directory tree for station listing files, reads them
//! leniently and streams their lines into a [`StationConsolidator`]. A file
//! that cannot be read is recorded and skipped; it never aborts the pass.

use super::consolidator::{ConsolidationResult, SourceLine, StationConsolidator};
use crate::config::ConsolidationConfig;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Find every file named `file_name` anywhere below `root`
///
/// Directories are visited in file-name order so repeated runs see files in
/// the same order. A symlink to a file is collected; directory symlinks are
/// not followed. Unreadable directories are logged and skipped.
pub fn discover_station_files(root: &Path, file_name: &str) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(Error::configuration(format!(
            "Directory does not exist: {}",
            root.display()
        )));
    }

    if !root.is_dir() {
        return Err(Error::configuration(format!(
            "Path is not a directory: {}",
            root.display()
        )));
    }

    debug!("Searching for '{}' files in {}", file_name, root.display());

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                // Symlinked listings count; symlinked directories are not entered
                if entry.file_name() == file_name && entry.path().is_file() {
                    files.push(entry.into_path());
                }
            }
            Err(e) => {
                warn!("Error walking directory {}: {}", root.display(), e);
            }
        }
    }

    info!("Found {} '{}' files", files.len(), file_name);
    Ok(files)
}

/// Read a station listing as text, dropping byte sequences that are not UTF-8
pub fn read_station_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;

    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    Ok(text)
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`
///
/// Terminators are not included. A trailing terminator does not produce an
/// empty final line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut position = 0;

    while position < bytes.len() {
        match bytes[position] {
            b'\n' => {
                lines.push(&text[start..position]);
                position += 1;
                start = position;
            }
            b'\r' => {
                lines.push(&text[start..position]);
                position += 1;
                if bytes.get(position) == Some(&b'\n') {
                    position += 1;
                }
                start = position;
            }
            _ => position += 1,
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Consolidate an explicit, ordered list of station listing files
pub fn consolidate_files(files: &[PathBuf], config: &ConsolidationConfig) -> ConsolidationResult {
    let mut consolidator = StationConsolidator::new(config.into());

    // Set up progress reporting
    let progress_bar = if config.show_progress {
        let pb = ProgressBar::new(files.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message("Reading station files...");
        Some(pb)
    } else {
        None
    };

    for path in files {
        if let Some(pb) = &progress_bar {
            pb.set_message(path.display().to_string());
        }

        match read_station_text(path) {
            Ok(text) => {
                for (index, line) in split_lines(&text).into_iter().enumerate() {
                    consolidator.ingest_line(SourceLine {
                        source: path,
                        line_number: index + 1,
                        text: line,
                    });
                }
                consolidator.record_file_read(path);
            }
            Err(e) => consolidator.record_file_failure(path, e.to_string()),
        }

        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_with_message(format!(
            "{} unique stations",
            consolidator.station_count()
        ));
    }

    consolidator.finish()
}

/// Discover and consolidate every station listing below `root`
///
/// # Errors
/// * `Error::Configuration` if `root` is missing or not a directory
/// * `Error::NoStationFiles` if no listing with the configured name exists
pub fn consolidate_directory(
    root: &Path,
    config: &ConsolidationConfig,
) -> Result<ConsolidationResult> {
    config.validate()?;

    let files = discover_station_files(root, &config.station_file_name)?;
    if files.is_empty() {
        return Err(Error::no_station_files(
            root.display().to_string(),
            &config.station_file_name,
        ));
    }

    let result = consolidate_files(&files, config);
    info!("{}", result.stats.summary());
    Ok(result)
}
