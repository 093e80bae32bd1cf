use dashboard_core::models::{DateRange, RentalRecord, RentalTable};

/// Rows of `table` whose date lies in `range`, both ends inclusive.
///
/// The table is sorted by date, so the selection is a contiguous slice
/// located by binary search. A range with `start > end` selects nothing.
pub fn filter_by_date(table: &RentalTable, range: DateRange) -> &[RentalRecord] {
    if range.is_vacuous() {
        return &[];
    }
    let records = table.records();
    let lo = records.partition_point(|r| r.date < range.start);
    let hi = records.partition_point(|r| r.date <= range.end);
    &records[lo..hi]
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_table(days: &[&str]) -> RentalTable {
        RentalTable::new(
            days.iter()
                .enumerate()
                .map(|(i, d)| RentalRecord {
                    date: date(d),
                    hour: i as i32,
                    working_day: true,
                    holiday: false,
                    casual: 1,
                    registered: 1,
                    total: 2,
                })
                .collect(),
        )
    }

    fn days_of(rows: &[RentalRecord]) -> Vec<String> {
        rows.iter().map(|r| r.date.to_string()).collect()
    }

    #[test]
    fn test_filter_inclusive_bounds() {
        let table = make_table(&["2012-01-01", "2012-01-02", "2012-01-03", "2012-01-04"]);
        let rows = filter_by_date(&table, DateRange::new(date("2012-01-02"), date("2012-01-03")));
        assert_eq!(days_of(rows), vec!["2012-01-02", "2012-01-03"]);
    }

    #[test]
    fn test_filter_keeps_every_hour_of_boundary_days() {
        let table = make_table(&["2012-01-01", "2012-01-02", "2012-01-02", "2012-01-02", "2012-01-03"]);
        let rows = filter_by_date(&table, DateRange::new(date("2012-01-02"), date("2012-01-02")));
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.date == date("2012-01-02")));
    }

    #[test]
    fn test_filter_full_range_returns_everything() {
        let table = make_table(&["2011-01-01", "2011-06-01", "2012-12-31"]);
        let range = table.full_range().unwrap();
        assert_eq!(filter_by_date(&table, range).len(), 3);
    }

    #[test]
    fn test_filter_start_after_end_is_empty() {
        let table = make_table(&["2012-01-01", "2012-01-02", "2012-01-03"]);
        let rows = filter_by_date(&table, DateRange::new(date("2012-01-03"), date("2012-01-01")));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_filter_range_outside_data() {
        let table = make_table(&["2012-01-01", "2012-01-02"]);
        let before = DateRange::new(date("2010-01-01"), date("2010-12-31"));
        let after = DateRange::new(date("2013-01-01"), date("2013-12-31"));
        assert!(filter_by_date(&table, before).is_empty());
        assert!(filter_by_date(&table, after).is_empty());
    }

    #[test]
    fn test_filter_range_wider_than_data() {
        let table = make_table(&["2012-01-01", "2012-01-02"]);
        let range = DateRange::new(date("2000-01-01"), date("2030-01-01"));
        assert_eq!(filter_by_date(&table, range).len(), 2);
    }

    #[test]
    fn test_filter_matches_linear_scan() {
        let table = make_table(&[
            "2012-03-05", "2012-01-01", "2012-02-10", "2012-02-10", "2012-04-30", "2012-02-29",
        ]);
        let range = DateRange::new(date("2012-02-10"), date("2012-03-05"));
        let expected: Vec<&RentalRecord> =
            table.records().iter().filter(|r| range.contains(r.date)).collect();
        let actual: Vec<&RentalRecord> = filter_by_date(&table, range).iter().collect();
        assert_eq!(actual, expected);
    }
}
