use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::models::DateRange;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Bike sharing dashboard: best opening hours and monthly rider trends
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bike-dashboard",
    about = "Bike sharing dashboard: best opening hours and monthly rider trends",
    version
)]
pub struct Settings {
    /// Hourly rental CSV to load
    #[arg(long, default_value = "hour.csv")]
    pub data_file: PathBuf,

    /// Initial range start (YYYY-MM-DD), defaults to the first date in the data
    #[arg(long, value_parser = parse_date)]
    pub start: Option<NaiveDate>,

    /// Initial range end (YYYY-MM-DD), defaults to the last date in the data
    #[arg(long, value_parser = parse_date)]
    pub end: Option<NaiveDate>,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: String,

    /// Bar highlighting: fixed position, or the true maximum
    #[arg(long, default_value = "fixed", value_parser = ["fixed", "max"])]
    pub highlight: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and apply derived values.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`load`](Self::load) but with an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    /// `--debug` overrides the log level.
    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }

    /// Initial date range for a dataset spanning `bounds`.
    ///
    /// Missing `--start`/`--end` fall back to the dataset bounds; explicit
    /// dates outside the bounds are clamped into them.
    pub fn initial_range(&self, bounds: DateRange) -> DateRange {
        let start = clamp_date(self.start.unwrap_or(bounds.start), bounds, "start");
        let end = clamp_date(self.end.unwrap_or(bounds.end), bounds, "end");
        DateRange::new(start, end)
    }
}

fn clamp_date(date: NaiveDate, bounds: DateRange, which: &str) -> NaiveDate {
    let clamped = date.clamp(bounds.start, bounds.end);
    if clamped != date {
        tracing::warn!(
            "--{} {} is outside the dataset ({} to {}); using {}",
            which,
            date,
            bounds.start,
            bounds.end,
            clamped
        );
    }
    clamped
}

/// Parse a `YYYY-MM-DD` command-line date.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got {:?}: {}", s, e))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
