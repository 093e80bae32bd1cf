//! CSV loading for the hourly rental dataset.
//!
//! Reads the columns the dashboard needs (`dteday`, `hr`, `workingday`,
//! `holiday`, `casual`, `registered`, `cnt`), ignores any others, parses the
//! day column as a calendar date and returns a date-sorted [`RentalTable`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use dashboard_core::error::{DashboardError, Result};
use dashboard_core::models::{RentalRecord, RentalTable};
use serde::Deserialize;
use tracing::{debug, info};

/// One CSV row as stored on disk.
#[derive(Debug, Deserialize)]
struct RawRentalRow {
    dteday: String,
    hr: i32,
    workingday: i64,
    holiday: i64,
    casual: i64,
    registered: i64,
    cnt: i64,
}

impl RawRentalRow {
    fn into_record(self, line: u64) -> Result<RentalRecord> {
        let date = parse_day(&self.dteday).ok_or_else(|| DashboardError::DateParse {
            value: self.dteday.clone(),
            line,
        })?;
        Ok(RentalRecord {
            date,
            hour: self.hr,
            working_day: self.workingday == 1,
            holiday: self.holiday == 1,
            casual: self.casual,
            registered: self.registered,
            total: self.cnt,
        })
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the rental CSV at `path` into a date-sorted table.
///
/// Fails when the file is missing or unreadable, when a row cannot be
/// decoded, when a `dteday` value is not a date, or when the file holds no
/// rows at all.
pub fn load_rentals(path: &Path) -> Result<RentalTable> {
    if !path.exists() {
        return Err(DashboardError::DataFileNotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|source| DashboardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_records(file, path)?;
    if records.is_empty() {
        return Err(DashboardError::EmptyDataset(path.to_path_buf()));
    }

    let table = RentalTable::new(records);
    info!(
        "Loaded {} rental rows from {} ({} to {})",
        table.len(),
        path.display(),
        table.min_date().map(|d| d.to_string()).unwrap_or_default(),
        table.max_date().map(|d| d.to_string()).unwrap_or_default(),
    );
    Ok(table)
}

/// Parse a `dteday` value into a calendar date.
///
/// Accepts plain `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`
/// and RFC 3339 timestamps; only the date part is kept.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(d) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(d);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn read_records<R: Read>(source: R, path: &Path) -> Result<Vec<RentalRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut records = Vec::new();
    for (idx, row) in rdr.deserialize::<RawRentalRow>().enumerate() {
        let raw = row.map_err(|source| DashboardError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        // Line 1 is the header.
        records.push(raw.into_record(idx as u64 + 2)?);
    }

    debug!("Read {} rows from {}", records.len(), path.display());
    Ok(records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
