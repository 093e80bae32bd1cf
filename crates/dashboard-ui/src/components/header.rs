use crate::themes::Theme;
use chrono::NaiveDate;
use dashboard_core::formatting::{format_count, format_date};
use ratatui::text::{Line, Span};

/// Decoration placed either side of the application title.
pub const WHEELS: &str = "◉─◉";

/// Dashboard header rendering four lines:
///
/// 1. Application title with wheel decorations (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. Selected range and row count in `[ start → end | N rows ]` format.
/// 4. An empty line.
pub struct Header<'a> {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Rows inside the selected range.
    pub rows: usize,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(start: NaiveDate, end: NaiveDate, rows: usize, theme: &'a Theme) -> Self {
        Self {
            start,
            end,
            rows,
            theme,
        }
    }

    /// Render the header as exactly four lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);
        let unit = if self.rows == 1 { "row" } else { "rows" };

        vec![
            Line::from(vec![
                Span::styled(WHEELS, self.theme.header_accent),
                Span::styled(" BIKE SHARING DASHBOARD ", self.theme.header),
                Span::styled(WHEELS, self.theme.header_accent),
            ]),
            Line::from(Span::styled(separator, self.theme.separator)),
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(format_date(self.start), self.theme.value),
                Span::styled(" → ", self.theme.label),
                Span::styled(format_date(self.end), self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(format!("{} {}", format_count(self.rows as i64), unit), self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
