//! Core types for the bike rental dashboard.
//!
//! Holds the rental record and table model, the fixed opening-window table,
//! summary types produced by the aggregator, errors, command-line settings
//! and display formatting helpers shared by the data and UI crates.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_windows;
