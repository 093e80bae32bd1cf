//! Data layer for the bike rental dashboard.
//!
//! Loads the hourly rental CSV into a [`RentalTable`], restricts it to a
//! date range and derives the opening-hours and monthly-bookings summaries
//! consumed by the UI.
//!
//! [`RentalTable`]: dashboard_core::models::RentalTable

pub mod aggregator;
pub mod filter;
pub mod pipeline;
pub mod reader;

pub use dashboard_core as core;
