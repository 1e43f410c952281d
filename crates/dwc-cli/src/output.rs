//! Result-set writers: CSV and JSON files plus the stdout JSON fallback.
//!
//! File destinations are never overwritten. Every file is opened with
//! `create_new`, and when the requested path already exists the whole write
//! is rerouted to a timestamped `Dell-Warranty-Status-*.csv` next to it,
//! leaving the original untouched.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::{DateTime, Local};

use dwc_core::{field_universe, WarrantyRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Csv,
    Json,
}

/// Writes the result set to `output`, or pretty-prints the JSON array
/// (keys sorted) to stdout when no output file was requested.
///
/// # Errors
///
/// Fails when the destination (or its collision fallback) cannot be
/// created, or a record cannot be serialized.
pub fn write_records(output: Option<&Path>, records: &[WarrantyRecord]) -> anyhow::Result<()> {
    let Some(requested) = output else {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    };

    let (path, format) = route_destination(requested);
    let (path, format) = if requested.exists() || path.exists() {
        let fallback = fallback_path(requested, &Local::now());
        tracing::warn!(
            requested = %requested.display(),
            fallback = %fallback.display(),
            "output file already exists; writing to fallback instead"
        );
        println!(
            "{} already exists - writing output to {} instead.",
            requested.display(),
            fallback.display()
        );
        (fallback, Format::Csv)
    } else {
        (path, format)
    };

    match format {
        Format::Csv => write_csv(&path, records)?,
        Format::Json => write_json(&path, records)?,
    }
    println!("Wrote output to file: {}", path.display());
    Ok(())
}

/// Picks the writer and final path for a destination: `.json`/`.jsn` select
/// JSON, `.csv` selects CSV, and anything else (including no extension)
/// gets `.csv` appended.
fn route_destination(path: &Path) -> (PathBuf, Format) {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("json" | "jsn") => (path.to_path_buf(), Format::Json),
        Some("csv") => (path.to_path_buf(), Format::Csv),
        _ => {
            let mut with_ext = path.as_os_str().to_owned();
            with_ext.push(".csv");
            (PathBuf::from(with_ext), Format::Csv)
        }
    }
}

/// Timestamped CSV path in the requested destination's directory.
fn fallback_path(requested: &Path, now: &DateTime<Local>) -> PathBuf {
    let name = format!("Dell-Warranty-Status-{}.csv", now.format("%Y-%m-%d_%H:%M:%S"));
    match requested.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Opens `path` for writing, failing if it already exists.
fn create_new(path: &Path) -> anyhow::Result<File> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("failed to create output file {}", path.display()))
}

/// CSV writer: header row is the union of keys across all records; fields a
/// record does not carry serialize as empty strings.
fn write_csv(path: &Path, records: &[WarrantyRecord]) -> anyhow::Result<()> {
    let headers = field_universe(records);
    let mut writer = csv::Writer::from_writer(create_new(path)?);
    // An empty batch has an empty field universe; leave the file empty
    // rather than writing a zero-column header record.
    if !headers.is_empty() {
        writer.write_record(&headers)?;
    }
    for record in records {
        let row: Vec<&str> = headers
            .iter()
            .map(|header| record.get(header).unwrap_or(""))
            .collect();
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// JSON writer: a single array of record objects.
fn write_json(path: &Path, records: &[WarrantyRecord]) -> anyhow::Result<()> {
    let file = create_new(path)?;
    serde_json::to_writer(file, records)?;
    Ok(())
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
