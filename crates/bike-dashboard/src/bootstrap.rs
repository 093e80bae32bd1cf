use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// `~/.bike-dashboard/`, or `./.bike-dashboard/` when no home is known.
pub fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bike-dashboard")
}

/// Log file used when `--log-file` is not given.
pub fn default_log_path() -> PathBuf {
    app_dir().join("logs").join("dashboard.log")
}

/// Create the parent directories of `path` and open it for appending.
pub fn open_log_file(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a Python-style level name to a tracing filter directive.
///
/// Unknown names pass through lowercased so `EnvFilter` can still try them.
pub fn level_directive(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" | "CRITICAL" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" => "error".to_string(),
        _ => log_level.to_lowercase(),
    }
}

/// Initialise the global `tracing` subscriber.
///
/// The TUI owns the terminal, so events go to `log_file` (default
/// [`default_log_path`]) without ANSI colours. Returns the path written to.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<PathBuf> {
    let path = log_file.cloned().unwrap_or_else(default_log_path);
    let file = open_log_file(&path)?;

    let filter =
        EnvFilter::try_new(level_directive(log_level)).unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("logging was already initialised")?;

    Ok(path)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
