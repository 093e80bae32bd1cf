//! Opening-hours and monthly-bookings summaries over rental records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use dashboard_core::models::{
    DayType, MonthlyBookings, MonthlyTotal, OpeningHoursSummary, RentalRecord, RiderType,
    WindowTotal,
};
use dashboard_core::time_windows::{is_opening_hour, TIME_WINDOWS};

// ── RentalAggregator ──────────────────────────────────────────────────────────

/// Stateless helper that buckets rental records into dashboard summaries.
pub struct RentalAggregator;

impl RentalAggregator {
    /// Opening-hours totals for rows flagged as working days.
    pub fn working_day_opening_hours(records: &[RentalRecord]) -> OpeningHoursSummary {
        Self::opening_hours(records, DayType::WorkingDay)
    }

    /// Opening-hours totals for rows flagged as holidays.
    pub fn holiday_opening_hours(records: &[RentalRecord]) -> OpeningHoursSummary {
        Self::opening_hours(records, DayType::Holiday)
    }

    /// Sum `total` per opening window for the rows of `day_type`.
    ///
    /// Only hours in `[5, 22]` are considered. A row counts toward every
    /// window containing its hour; windows with no rows are left out, so
    /// the result keeps window order but may have gaps. Totals saturate
    /// at the `i64` bounds.
    pub fn opening_hours(records: &[RentalRecord], day_type: DayType) -> OpeningHoursSummary {
        let opening: Vec<&RentalRecord> = records
            .iter()
            .filter(|r| day_type.matches(r) && is_opening_hour(r.hour))
            .collect();

        let windows = TIME_WINDOWS
            .iter()
            .filter_map(|window| {
                let mut rows = opening.iter().filter(|r| window.contains(r.hour)).peekable();
                rows.peek()?;
                Some(WindowTotal {
                    window: window.name,
                    total: rows.map(|r| r.total).fold(0, i64::saturating_add),
                })
            })
            .collect();

        OpeningHoursSummary { day_type, windows }
    }

    /// Monthly totals of casual orders.
    pub fn casual_monthly_bookings(records: &[RentalRecord]) -> MonthlyBookings {
        Self::monthly_bookings(records, RiderType::Casual)
    }

    /// Monthly totals of registered orders.
    pub fn registered_monthly_bookings(records: &[RentalRecord]) -> MonthlyBookings {
        Self::monthly_bookings(records, RiderType::Registered)
    }

    /// Sum the `rider_type` count per calendar month, ascending by month.
    ///
    /// Rows whose count is zero or negative are dropped first, so a month
    /// only appears when it has at least one positive value.
    pub fn monthly_bookings(records: &[RentalRecord], rider_type: RiderType) -> MonthlyBookings {
        let months = Self::aggregate_by_period(
            records.iter().filter(|r| rider_type.count(r) > 0),
            |d| d.format("%Y-%m").to_string(),
            |r| rider_type.count(r),
        );
        MonthlyBookings { rider_type, months }
    }

    // ── Private ───────────────────────────────────────────────────────────────

    /// `key_fn` maps a calendar date to the period key.
    fn aggregate_by_period<'a>(
        records: impl Iterator<Item = &'a RentalRecord>,
        key_fn: impl Fn(NaiveDate) -> String,
        value_fn: impl Fn(&RentalRecord) -> i64,
    ) -> Vec<MonthlyTotal> {
        let mut map: BTreeMap<String, i64> = BTreeMap::new();

        for record in records {
            let total = map.entry(key_fn(record.date)).or_insert(0);
            *total = total.saturating_add(value_fn(record));
        }

        map.into_iter()
            .map(|(month, total)| MonthlyTotal { month, total })
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
