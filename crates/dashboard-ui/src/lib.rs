//! Terminal UI layer for the bike sharing dashboard.
//!
//! Provides themes, the header and date-range picker components, the
//! opening-hours bar panels, the monthly bookings chart and the application
//! event loop built on top of [`ratatui`].

pub mod app;
pub mod components;
pub mod monthly_view;
pub mod opening_hours_view;
pub mod themes;

pub use dashboard_core as core;
