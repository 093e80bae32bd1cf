//! One full dashboard computation for a date range.

use dashboard_core::models::{DateRange, MonthlyBookings, OpeningHoursSummary, RentalTable};
use tracing::debug;

use crate::aggregator::RentalAggregator;
use crate::filter::filter_by_date;

/// Everything the UI draws for one selected range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardData {
    pub range: DateRange,
    /// Rows of the table inside `range`.
    pub rows_selected: usize,
    pub working_day_hours: OpeningHoursSummary,
    pub holiday_hours: OpeningHoursSummary,
    pub casual_monthly: MonthlyBookings,
    pub registered_monthly: MonthlyBookings,
}

impl DashboardData {
    /// `true` when the range selected no rows.
    pub fn is_empty(&self) -> bool {
        self.rows_selected == 0
    }
}

/// Filter `table` to `range` and compute the four summaries.
///
/// Pure: calling it twice with the same inputs yields equal results.
pub fn build_dashboard(table: &RentalTable, range: DateRange) -> DashboardData {
    let rows = filter_by_date(table, range);
    debug!(
        "Building dashboard for {} to {}: {} of {} rows selected",
        range.start,
        range.end,
        rows.len(),
        table.len()
    );

    let data = DashboardData {
        range,
        rows_selected: rows.len(),
        working_day_hours: RentalAggregator::working_day_opening_hours(rows),
        holiday_hours: RentalAggregator::holiday_opening_hours(rows),
        casual_monthly: RentalAggregator::casual_monthly_bookings(rows),
        registered_monthly: RentalAggregator::registered_monthly_bookings(rows),
    };

    debug!(
        "Summaries: {} working-day windows, {} holiday windows, {} casual months, {} registered months",
        data.working_day_hours.windows.len(),
        data.holiday_hours.windows.len(),
        data.casual_monthly.months.len(),
        data.registered_monthly.months.len()
    );
    data
}

// ── Tests ─────────────────────────────────────────────────────────────────────
