use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the bike rental dashboard.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The data file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured data file does not exist.
    #[error("Data file not found: {0}")]
    DataFileNotFound(PathBuf),

    /// A CSV row could not be decoded into a rental row.
    #[error("Failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A `dteday` value did not match any recognised date format.
    #[error("Invalid date {value:?} on line {line}")]
    DateParse { value: String, line: u64 },

    /// The data file parsed but contained no rows.
    #[error("No rental records found in {0}")]
    EmptyDataset(PathBuf),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the dashboard crates.
pub type Result<T> = std::result::Result<T, DashboardError>;
