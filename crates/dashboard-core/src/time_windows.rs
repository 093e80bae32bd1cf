//! Candidate opening-hour windows.
//!
//! Ten overlapping 9-hour spans, each a closed interval over hour-of-day,
//! stepping the start hour by one from 05:00 to 14:00.

/// First hour of the business day considered by the opening-hours summary.
pub const OPENING_START_HOUR: i32 = 5;

/// Last hour of the business day considered by the opening-hours summary.
pub const OPENING_END_HOUR: i32 = 22;

/// A named, closed interval `[start, end]` over hour-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub name: &'static str,
    pub start: i32,
    pub end: i32,
}

impl TimeWindow {
    const fn new(name: &'static str, start: i32, end: i32) -> Self {
        Self { name, start, end }
    }

    /// Whether `hour` falls inside the window (both ends inclusive).
    pub fn contains(&self, hour: i32) -> bool {
        self.start <= hour && hour <= self.end
    }
}

/// The fixed window table, in display order.
pub const TIME_WINDOWS: [TimeWindow; 10] = [
    TimeWindow::new("05-13", 5, 13),
    TimeWindow::new("06-14", 6, 14),
    TimeWindow::new("07-15", 7, 15),
    TimeWindow::new("08-16", 8, 16),
    TimeWindow::new("09-17", 9, 17),
    TimeWindow::new("10-18", 10, 18),
    TimeWindow::new("11-19", 11, 19),
    TimeWindow::new("12-20", 12, 20),
    TimeWindow::new("13-21", 13, 21),
    TimeWindow::new("14-22", 14, 22),
];

/// Whether `hour` is within the business day `[5, 22]`.
pub fn is_opening_hour(hour: i32) -> bool {
    (OPENING_START_HOUR..=OPENING_END_HOUR).contains(&hour)
}

/// All windows containing `hour`, in table order.
pub fn windows_containing(hour: i32) -> impl Iterator<Item = &'static TimeWindow> {
    TIME_WINDOWS.iter().filter(move |w| w.contains(hour))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_window_spans_nine_hours() {
        for w in &TIME_WINDOWS {
            assert_eq!(w.end - w.start + 1, 9, "window {} must span 9 hours", w.name);
        }
    }

    #[test]
    fn test_window_names_match_bounds() {
        for w in &TIME_WINDOWS {
            assert_eq!(w.name, format!("{:02}-{:02}", w.start, w.end));
        }
    }

    #[test]
    fn test_windows_step_by_one_hour() {
        for pair in TIME_WINDOWS.windows(2) {
            assert_eq!(pair[1].start - pair[0].start, 1);
        }
    }

    #[test]
    fn test_windows_stay_inside_opening_hours() {
        for w in &TIME_WINDOWS {
            assert!(is_opening_hour(w.start));
            assert!(is_opening_hour(w.end));
        }
    }

    #[test]
    fn test_hour_ten_falls_in_six_windows() {
        let names: Vec<&str> = windows_containing(10).map(|w| w.name).collect();
        assert_eq!(
            names,
            vec!["05-13", "06-14", "07-15", "08-16", "09-17", "10-18"]
        );
    }

    #[test]
    fn test_edge_hours() {
        let at_five: Vec<&str> = windows_containing(5).map(|w| w.name).collect();
        assert_eq!(at_five, vec!["05-13"]);

        let at_twenty_two: Vec<&str> = windows_containing(22).map(|w| w.name).collect();
        assert_eq!(at_twenty_two, vec!["14-22"]);

        assert_eq!(windows_containing(4).count(), 0);
        assert_eq!(windows_containing(23).count(), 0);
    }

    #[test]
    fn test_is_opening_hour_bounds() {
        assert!(!is_opening_hour(4));
        assert!(is_opening_hour(5));
        assert!(is_opening_hour(22));
        assert!(!is_opening_hour(23));
        assert!(!is_opening_hour(-1));
    }
}
