use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One hourly bike-rental observation.
///
/// Hours and counts are kept signed: the loader does not validate ranges, so
/// out-of-range input flows through the same filter/sum rules as valid rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRecord {
    /// Calendar day of the observation.
    pub date: NaiveDate,
    /// Hour of day, normally 0-23.
    pub hour: i32,
    /// `true` when the day is a non-holiday weekday.
    pub working_day: bool,
    /// `true` when the day is a public holiday.
    pub holiday: bool,
    /// Orders placed by casual riders.
    pub casual: i64,
    /// Orders placed by registered riders.
    pub registered: i64,
    /// Total orders (casual + registered).
    pub total: i64,
}

/// Which subset of days an opening-hours summary covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Rows flagged `workingday == 1`.
    WorkingDay,
    /// Rows flagged `holiday == 1`.
    Holiday,
}

impl DayType {
    /// Whether `record` belongs to this subset.
    pub fn matches(self, record: &RentalRecord) -> bool {
        match self {
            DayType::WorkingDay => record.working_day,
            DayType::Holiday => record.holiday,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayType::WorkingDay => "Working Days",
            DayType::Holiday => "Holidays",
        }
    }
}

/// Rider category selecting which count column a monthly summary sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiderType {
    Casual,
    Registered,
}

impl RiderType {
    /// The count this rider type contributes to `record`.
    pub fn count(self, record: &RentalRecord) -> i64 {
        match self {
            RiderType::Casual => record.casual,
            RiderType::Registered => record.registered,
        }
    }

    /// Legend label used by the monthly chart.
    pub fn series_label(self) -> &'static str {
        match self {
            RiderType::Casual => "Casual Orders",
            RiderType::Registered => "Registered Orders",
        }
    }
}

// ── DateRange ─────────────────────────────────────────────────────────────────

/// Inclusive calendar-date range.
///
/// A range whose `start` is after its `end` is valid and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` lies within `[start, end]`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// `true` when `start > end`.
    pub fn is_vacuous(&self) -> bool {
        self.start > self.end
    }
}

// ── RentalTable ───────────────────────────────────────────────────────────────

/// The loaded dataset: records sorted by date, never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalTable {
    records: Vec<RentalRecord>,
}

impl RentalTable {
    /// Build a table, stably sorting `records` by date.
    ///
    /// Rows sharing a date keep their input order.
    pub fn new(mut records: Vec<RentalRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest date in the table.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    /// Latest date in the table.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }

    /// The range covering the whole table, `None` when empty.
    pub fn full_range(&self) -> Option<DateRange> {
        Some(DateRange::new(self.min_date()?, self.max_date()?))
    }
}

// ── Summaries ─────────────────────────────────────────────────────────────────

/// Summed total count for one opening window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowTotal {
    /// Window name, e.g. `"08-16"`.
    pub window: &'static str,
    pub total: i64,
}

/// Per-window order totals for one day type, in window definition order.
///
/// Windows with no matching rows are absent rather than zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpeningHoursSummary {
    pub day_type: DayType,
    pub windows: Vec<WindowTotal>,
}

impl OpeningHoursSummary {
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Total for the named window, `None` when the window was omitted.
    pub fn get(&self, window: &str) -> Option<i64> {
        self.windows
            .iter()
            .find(|w| w.window == window)
            .map(|w| w.total)
    }

    /// Largest total across the present windows.
    pub fn max_total(&self) -> Option<i64> {
        self.windows.iter().map(|w| w.total).max()
    }
}

/// Summed count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    /// Month key in `%Y-%m` form.
    pub month: String,
    pub total: i64,
}

/// Month-by-month order totals for one rider type, ascending by month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBookings {
    pub rider_type: RiderType,
    pub months: Vec<MonthlyTotal>,
}

impl MonthlyBookings {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn get(&self, month: &str) -> Option<i64> {
        self.months
            .iter()
            .find(|m| m.month == month)
            .map(|m| m.total)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(d: &str, hour: i32) -> RentalRecord {
        RentalRecord {
            date: date(d),
            hour,
            working_day: true,
            holiday: false,
            casual: 3,
            registered: 7,
            total: 10,
        }
    }

    // ── DayType / RiderType ───────────────────────────────────────────────────

    #[test]
    fn test_day_type_matches_flags() {
        let mut r = record("2011-01-01", 8);
        assert!(DayType::WorkingDay.matches(&r));
        assert!(!DayType::Holiday.matches(&r));

        r.working_day = false;
        r.holiday = true;
        assert!(!DayType::WorkingDay.matches(&r));
        assert!(DayType::Holiday.matches(&r));
    }

    #[test]
    fn test_day_type_flags_not_complementary() {
        // A weekend row is neither a working day nor a holiday.
        let mut r = record("2011-01-01", 8);
        r.working_day = false;
        assert!(!DayType::WorkingDay.matches(&r));
        assert!(!DayType::Holiday.matches(&r));
    }

    #[test]
    fn test_rider_type_count_and_label() {
        let r = record("2011-01-01", 8);
        assert_eq!(RiderType::Casual.count(&r), 3);
        assert_eq!(RiderType::Registered.count(&r), 7);
        assert_eq!(RiderType::Casual.series_label(), "Casual Orders");
        assert_eq!(RiderType::Registered.series_label(), "Registered Orders");
    }

    // ── DateRange ─────────────────────────────────────────────────────────────

    #[test]
    fn test_date_range_inclusive_both_ends() {
        let range = DateRange::new(date("2012-03-01"), date("2012-03-31"));
        assert!(range.contains(date("2012-03-01")));
        assert!(range.contains(date("2012-03-31")));
        assert!(!range.contains(date("2012-02-29")));
        assert!(!range.contains(date("2012-04-01")));
        assert!(!range.is_vacuous());
    }

    #[test]
    fn test_date_range_vacuous_contains_nothing() {
        let range = DateRange::new(date("2012-03-31"), date("2012-03-01"));
        assert!(range.is_vacuous());
        assert!(!range.contains(date("2012-03-15")));
        assert!(!range.contains(date("2012-03-01")));
    }

    // ── RentalTable ───────────────────────────────────────────────────────────

    #[test]
    fn test_table_sorted_by_date_stable() {
        let table = RentalTable::new(vec![
            record("2011-01-03", 1),
            record("2011-01-01", 5),
            record("2011-01-03", 0),
            record("2011-01-02", 9),
        ]);
        let keys: Vec<(String, i32)> = table
            .records()
            .iter()
            .map(|r| (r.date.to_string(), r.hour))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("2011-01-01".to_string(), 5),
                ("2011-01-02".to_string(), 9),
                ("2011-01-03".to_string(), 1),
                ("2011-01-03".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_table_bounds() {
        let table = RentalTable::new(vec![record("2012-05-10", 1), record("2011-02-01", 2)]);
        assert_eq!(table.min_date(), Some(date("2011-02-01")));
        assert_eq!(table.max_date(), Some(date("2012-05-10")));
        assert_eq!(
            table.full_range(),
            Some(DateRange::new(date("2011-02-01"), date("2012-05-10")))
        );
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_empty_table_has_no_range() {
        let table = RentalTable::new(vec![]);
        assert!(table.is_empty());
        assert!(table.full_range().is_none());
    }

    // ── Summaries ─────────────────────────────────────────────────────────────

    #[test]
    fn test_opening_hours_summary_lookup() {
        let summary = OpeningHoursSummary {
            day_type: DayType::WorkingDay,
            windows: vec![
                WindowTotal { window: "05-13", total: 40 },
                WindowTotal { window: "06-14", total: 90 },
            ],
        };
        assert_eq!(summary.get("06-14"), Some(90));
        assert_eq!(summary.get("14-22"), None);
        assert_eq!(summary.max_total(), Some(90));
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_monthly_bookings_lookup() {
        let bookings = MonthlyBookings {
            rider_type: RiderType::Casual,
            months: vec![MonthlyTotal {
                month: "2012-07".to_string(),
                total: 12,
            }],
        };
        assert_eq!(bookings.get("2012-07"), Some(12));
        assert_eq!(bookings.get("2012-08"), None);
    }
}
