//! Sidebar date-range picker ("Rentang Waktu").
//!
//! Holds the selectable bounds, the chosen start and end dates and which of
//! the two the arrow keys currently move. Every edit is clamped into the
//! bounds; start may be moved past end, which selects nothing.

use chrono::{Duration, NaiveDate};
use crossterm::event::KeyCode;
use dashboard_core::formatting::format_date;
use dashboard_core::models::DateRange;
use ratatui::text::{Line, Span};

use crate::themes::Theme;

/// Sidebar label of the picker.
pub const PICKER_TITLE: &str = "Rentang Waktu";

/// Which end of the range key presses edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerField {
    Start,
    End,
}

impl PickerField {
    pub fn toggle(self) -> Self {
        match self {
            PickerField::Start => PickerField::End,
            PickerField::End => PickerField::Start,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangePicker {
    bounds: DateRange,
    start: NaiveDate,
    end: NaiveDate,
    focus: PickerField,
}

impl DateRangePicker {
    /// Create a picker over `bounds` preset to `initial`, clamped into the
    /// bounds.
    pub fn new(bounds: DateRange, initial: DateRange) -> Self {
        Self {
            bounds,
            start: initial.start.clamp(bounds.start, bounds.end),
            end: initial.end.clamp(bounds.start, bounds.end),
            focus: PickerField::Start,
        }
    }

    pub fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }

    pub fn bounds(&self) -> DateRange {
        self.bounds
    }

    pub fn focus(&self) -> PickerField {
        self.focus
    }

    /// Apply a key press. Returns `true` when the selected range changed.
    ///
    /// Keys the picker does not use are ignored and return `false`.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                false
            }
            KeyCode::Left => self.shift_focused(-1),
            KeyCode::Right => self.shift_focused(1),
            KeyCode::Up => self.shift_focused(-7),
            KeyCode::Down => self.shift_focused(7),
            KeyCode::PageUp => self.shift_focused(-30),
            KeyCode::PageDown => self.shift_focused(30),
            KeyCode::Home => self.set_focused(self.bounds.start),
            KeyCode::End => self.set_focused(self.bounds.end),
            KeyCode::Char('r') => self.reset(),
            _ => false,
        }
    }

    /// Move the focused date by `days`, stopping at the bounds.
    pub fn shift_focused(&mut self, days: i64) -> bool {
        let current = self.focused_date();
        let target = current
            .checked_add_signed(Duration::days(days))
            .unwrap_or(if days < 0 { self.bounds.start } else { self.bounds.end });
        self.set_focused(target)
    }

    /// Set the focused date, clamped into the bounds.
    pub fn set_focused(&mut self, date: NaiveDate) -> bool {
        let clamped = date.clamp(self.bounds.start, self.bounds.end);
        let slot = match self.focus {
            PickerField::Start => &mut self.start,
            PickerField::End => &mut self.end,
        };
        let changed = *slot != clamped;
        *slot = clamped;
        changed
    }

    /// Select the full bounds again.
    pub fn reset(&mut self) -> bool {
        let changed = self.range() != self.bounds;
        self.start = self.bounds.start;
        self.end = self.bounds.end;
        changed
    }

    fn focused_date(&self) -> NaiveDate {
        match self.focus {
            PickerField::Start => self.start,
            PickerField::End => self.end,
        }
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Sidebar lines: title, the two fields, a warning when the range is
    /// empty, and key help.
    pub fn to_lines<'a>(&self, theme: &'a Theme) -> Vec<Line<'a>> {
        let field_style = |field: PickerField| {
            if self.focus == field {
                theme.picker_focus
            } else {
                theme.picker_field
            }
        };

        let mut lines = vec![
            Line::from(Span::styled(PICKER_TITLE, theme.picker_title)),
            Line::from(""),
            Line::from(vec![
                Span::styled("Start ", theme.label),
                Span::styled(format!(" {} ", format_date(self.start)), field_style(PickerField::Start)),
            ]),
            Line::from(vec![
                Span::styled("End   ", theme.label),
                Span::styled(format!(" {} ", format_date(self.end)), field_style(PickerField::End)),
            ]),
            Line::from(""),
        ];

        if self.range().is_vacuous() {
            lines.push(Line::from(Span::styled("Start is after end", theme.warning)));
            lines.push(Line::from(Span::styled("no rows selected", theme.warning)));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("Data ", theme.dim),
            Span::styled(
                format!("{} → {}", format_date(self.bounds.start), format_date(self.bounds.end)),
                theme.dim,
            ),
        ]));
        lines.push(Line::from(""));

        for (keys, action) in [
            ("Tab", "switch field"),
            ("←/→", "±1 day"),
            ("↑/↓", "±1 week"),
            ("PgUp/PgDn", "±30 days"),
            ("Home/End", "first/last day"),
            ("r", "reset range"),
            ("q/Esc", "quit"),
        ] {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<10}", keys), theme.label),
                Span::styled(action, theme.dim),
            ]));
        }

        lines
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn bounds() -> DateRange {
        DateRange::new(date("2011-01-01"), date("2012-12-31"))
    }

    fn make_picker() -> DateRangePicker {
        DateRangePicker::new(bounds(), bounds())
    }

    fn text_of(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ── Construction ──────────────────────────────────────────────────────────

    #[test]
    fn test_new_defaults_to_start_focus() {
        let picker = make_picker();
        assert_eq!(picker.range(), bounds());
        assert_eq!(picker.focus(), PickerField::Start);
    }

    #[test]
    fn test_new_clamps_initial_range() {
        let picker = DateRangePicker::new(
            bounds(),
            DateRange::new(date("2009-01-01"), date("2015-01-01")),
        );
        assert_eq!(picker.range(), bounds());
    }

    // ── Key handling ──────────────────────────────────────────────────────────

    #[test]
    fn test_tab_switches_focus_without_change() {
        let mut picker = make_picker();
        assert!(!picker.handle_key(KeyCode::Tab));
        assert_eq!(picker.focus(), PickerField::End);
        assert!(!picker.handle_key(KeyCode::BackTab));
        assert_eq!(picker.focus(), PickerField::Start);
    }

    #[test]
    fn test_arrows_move_focused_date() {
        let mut picker = make_picker();
        assert!(picker.handle_key(KeyCode::Right));
        assert_eq!(picker.range().start, date("2011-01-02"));

        assert!(picker.handle_key(KeyCode::Down));
        assert_eq!(picker.range().start, date("2011-01-09"));

        assert!(picker.handle_key(KeyCode::PageDown));
        assert_eq!(picker.range().start, date("2011-02-08"));

        assert!(picker.handle_key(KeyCode::Up));
        assert_eq!(picker.range().start, date("2011-02-01"));

        // End untouched while start is focused.
        assert_eq!(picker.range().end, date("2012-12-31"));
    }

    #[test]
    fn test_moves_clamp_to_bounds() {
        let mut picker = make_picker();
        assert!(!picker.handle_key(KeyCode::Left));
        assert!(!picker.handle_key(KeyCode::PageUp));
        assert_eq!(picker.range().start, date("2011-01-01"));

        picker.handle_key(KeyCode::Tab);
        assert!(!picker.handle_key(KeyCode::Right));
        assert_eq!(picker.range().end, date("2012-12-31"));

        picker.handle_key(KeyCode::Home);
        assert!(!picker.handle_key(KeyCode::PageUp));
        assert_eq!(picker.range().end, date("2011-01-01"));
    }

    #[test]
    fn test_home_end_jump_to_bounds() {
        let mut picker = make_picker();
        assert!(picker.handle_key(KeyCode::End));
        assert_eq!(picker.range().start, date("2012-12-31"));
        assert!(picker.handle_key(KeyCode::Home));
        assert_eq!(picker.range().start, date("2011-01-01"));
        assert!(!picker.handle_key(KeyCode::Home));
    }

    #[test]
    fn test_start_may_pass_end() {
        let mut picker = DateRangePicker::new(
            bounds(),
            DateRange::new(date("2012-06-01"), date("2012-06-03")),
        );
        picker.handle_key(KeyCode::Down);
        assert!(picker.range().is_vacuous());
        assert_eq!(picker.range().start, date("2012-06-08"));
    }

    #[test]
    fn test_reset_restores_full_range() {
        let mut picker = make_picker();
        picker.handle_key(KeyCode::PageDown);
        picker.handle_key(KeyCode::Tab);
        picker.handle_key(KeyCode::PageUp);

        assert!(picker.handle_key(KeyCode::Char('r')));
        assert_eq!(picker.range(), bounds());
        assert!(!picker.handle_key(KeyCode::Char('r')));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut picker = make_picker();
        assert!(!picker.handle_key(KeyCode::Char('x')));
        assert!(!picker.handle_key(KeyCode::Enter));
        assert_eq!(picker.range(), bounds());
    }

    #[test]
    fn test_single_day_bounds() {
        let day = date("2012-02-29");
        let one = DateRange::new(day, day);
        let mut picker = DateRangePicker::new(one, one);
        for key in [KeyCode::Left, KeyCode::Right, KeyCode::Up, KeyCode::Down, KeyCode::Home, KeyCode::End] {
            assert!(!picker.handle_key(key));
        }
        assert_eq!(picker.range(), one);
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    #[test]
    fn test_to_lines_shows_title_and_dates() {
        let theme = Theme::dark();
        let text = text_of(&make_picker().to_lines(&theme));
        assert!(text.starts_with(PICKER_TITLE));
        assert!(text.contains("2011/01/01"));
        assert!(text.contains("2012/12/31"));
        assert!(!text.contains("no rows selected"));
    }

    #[test]
    fn test_to_lines_focus_styles_one_field() {
        let theme = Theme::dark();
        let picker = make_picker();
        let lines = picker.to_lines(&theme);
        assert_eq!(lines[2].spans[1].style, theme.picker_focus);
        assert_eq!(lines[3].spans[1].style, theme.picker_field);
    }

    #[test]
    fn test_to_lines_warns_on_vacuous_range() {
        let theme = Theme::dark();
        let picker = DateRangePicker::new(
            bounds(),
            DateRange::new(date("2012-06-01"), date("2012-01-01")),
        );
        let text = text_of(&picker.to_lines(&theme));
        assert!(text.contains("no rows selected"));
    }
}
