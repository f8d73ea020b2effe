//! Report rendering and writing

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use tempfile::Builder;

use crate::scanner::file_scanner::FileRecord;

/// Column headers of the Markdown table
pub const HEADERS: [&str; 6] = [
    "Filename",
    "Extension",
    "Size (KB)",
    "Last Modified",
    "Path",
    "Reason Found",
];

/// Document written when the scan found nothing.
/// Unlike the populated report it does not name the searched directory.
pub const EMPTY_REPORT: &str = "# Search Results\n\nNo files found in the specified directory.\n";

#[derive(Serialize)]
struct JsonReport<'a> {
    searched_directory: &'a Path,
    total_files: usize,
    files: &'a [FileRecord],
}

/// Render scan results as a column-aligned Markdown document
///
/// # Arguments
/// * `records` - Classified file records, in scan order
/// * `searched_directory` - Directory as given by the user
pub fn render_markdown(records: &[FileRecord], searched_directory: &Path) -> String {
    if records.is_empty() {
        return EMPTY_REPORT.to_string();
    }

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let rows: Vec<Vec<String>> = records.iter().map(record_cells).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut doc = format!(
        "# Search Results\n\n**Searched Directory:** `{}`\n\n## Found Files\n\n",
        searched_directory.display()
    );
    doc.push_str(&format_row(&header, &widths));
    doc.push('\n');

    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    doc.push_str(&format!("|-{}-|\n", dashes.join("-|-")));

    for row in &rows {
        doc.push_str(&format_row(row, &widths));
        doc.push('\n');
    }

    doc
}

/// Render scan results as pretty-printed JSON
pub fn render_json(records: &[FileRecord], searched_directory: &Path) -> Result<String> {
    let report = JsonReport {
        searched_directory,
        total_files: records.len(),
        files: records,
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize report")
}

/// Count records per category, in the order categories first appear
pub fn summarize(records: &[FileRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|(reason, _)| *reason == record.reason) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.reason.clone(), 1)),
        }
    }
    counts
}

/// Write a rendered report to `output_dir/output_filename`
///
/// The output directory is created if missing and any existing file is replaced.
/// Content goes to a temporary file next to the target first, so a failed
/// write never leaves a truncated report behind. On Unix the report gets the
/// usual umask-derived mode rather than the owner-only temp file mode.
///
/// # Returns
/// Path of the written report
pub fn write_report(document: &str, output_dir: &Path, output_filename: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let output_path = output_dir.join(output_filename);
    let parent = output_path.parent().unwrap_or(output_dir);

    let mut builder = Builder::new();
    // Same mode as a plainly created file, before umask
    #[cfg(unix)]
    builder.permissions(fs::Permissions::from_mode(0o666));
    let mut temp = builder
        .tempfile_in(parent)
        .with_context(|| format!("Failed to create temporary file in {}", parent.display()))?;
    temp.write_all(document.as_bytes())
        .context("Failed to write report")?;
    temp.as_file()
        .sync_all()
        .context("Failed to flush report")?;
    temp.persist(&output_path)
        .with_context(|| format!("Failed to save report to {}", output_path.display()))?;

    log::info!("Wrote {} bytes to {}", document.len(), output_path.display());
    Ok(output_path)
}

/// Size column text: whole numbers keep one decimal place (`2.0`), others print as-is
pub fn format_size_kb(size_kb: f64) -> String {
    if size_kb.fract() == 0.0 {
        format!("{:.1}", size_kb)
    } else {
        format!("{}", size_kb)
    }
}

fn record_cells(record: &FileRecord) -> Vec<String> {
    vec![
        record.filename.clone(),
        record.extension.clone(),
        format_size_kb(record.size_kb),
        record.last_modified.clone(),
        record.path.display().to_string(),
        record.reason.clone(),
    ]
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    format!("| {} |", padded.join(" | "))
}
