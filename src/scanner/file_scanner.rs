//! Directory scanning and file record collection

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::classifier::classify;

/// Placeholder stored when a file has no extension
pub const NO_EXTENSION: &str = "N/A";

/// Timestamp layout used for `last_modified`
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// One scanned regular file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRecord {
    pub filename: String,
    pub extension: String,
    pub size_kb: f64,
    pub last_modified: String,
    pub path: PathBuf,
    pub reason: String,
}

/// Scan a directory tree and classify every regular file in it
///
/// # Arguments
/// * `root` - Directory to scan
///
/// # Returns
/// One record per regular file, in traversal order
pub fn scan_directory(root: &Path) -> Result<Vec<FileRecord>> {
    scan_directory_with(root, |_| {})
}

/// Same as [`scan_directory`], calling `on_record` for each record as it is produced
pub fn scan_directory_with<F>(root: &Path, mut on_record: F) -> Result<Vec<FileRecord>>
where
    F: FnMut(&FileRecord),
{
    let root_meta = fs::metadata(root)
        .with_context(|| format!("Cannot access directory {}", root.display()))?;
    if !root_meta.is_dir() {
        bail!("{} is not a directory", root.display());
    }

    log::debug!("Scanning {}", root.display());
    let mut records = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(err)
                    .with_context(|| format!("Cannot read directory {}", root.display()));
            }
            Err(err) => {
                log::warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        // Symlinks are resolved here so a link to a regular file is still reported
        let metadata = match fs::metadata(entry.path()) {
            Ok(metadata) => metadata,
            Err(err) => {
                log::warn!("Skipping {}: {}", entry.path().display(), err);
                continue;
            }
        };
        if !metadata.is_file() {
            log::debug!("Skipping non-regular file {}", entry.path().display());
            continue;
        }

        let filename = entry.file_name().to_string_lossy().into_owned();
        let extension = extension_of(entry.path());
        let last_modified = match metadata.modified() {
            Ok(time) => format_timestamp(time.into()),
            Err(err) => {
                log::warn!("Skipping {}: {}", entry.path().display(), err);
                continue;
            }
        };
        let reason = classify(&filename, &extension).to_string();

        let record = FileRecord {
            filename,
            extension,
            size_kb: size_in_kb(metadata.len()),
            last_modified,
            path: entry.into_path(),
            reason,
        };
        on_record(&record);
        records.push(record);
    }

    log::debug!("Found {} file(s) under {}", records.len(), root.display());
    Ok(records)
}

/// Extension of `path` with its leading dot, or [`NO_EXTENSION`]
pub fn extension_of(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy()),
        _ => NO_EXTENSION.to_string(),
    }
}

/// Convert a byte count to kibibytes rounded to two decimals, exact halves to even
pub fn size_in_kb(bytes: u64) -> f64 {
    (bytes as f64 / 1024.0 * 100.0).round_ties_even() / 100.0
}

/// Format a modification time as `DD-MM-YYYY HH:MM:SS`
pub fn format_timestamp(time: DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}
