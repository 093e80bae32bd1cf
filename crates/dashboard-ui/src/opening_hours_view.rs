//! "Best Opening Hours" panels.
//!
//! Two horizontal bar charts side by side: working days on the left with
//! bars growing rightwards, holidays on the right mirrored so bars grow
//! leftwards and window names sit on the right edge. One bar per panel is
//! highlighted.

use dashboard_core::formatting::format_count;
use dashboard_core::models::{DayType, OpeningHoursSummary};
use dashboard_data::pipeline::DashboardData;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::components::no_data_paragraph;
use crate::themes::Theme;

/// Highlighted bar position on the working-day panel.
pub const WORKING_DAY_HIGHLIGHT: usize = 7;

/// Highlighted bar position on the holiday panel.
pub const HOLIDAY_HIGHLIGHT: usize = 6;

/// How the highlighted bar is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightMode {
    /// A fixed position among the bars shown, whatever its value.
    Fixed,
    /// The bar with the largest total (first one on ties).
    Max,
}

impl HighlightMode {
    /// `"max"` selects [`HighlightMode::Max`]; anything else is fixed.
    pub fn from_name(name: &str) -> Self {
        match name {
            "max" => HighlightMode::Max,
            _ => HighlightMode::Fixed,
        }
    }
}

/// Which way bars grow from their window label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarDirection {
    LeftToRight,
    RightToLeft,
}

/// Index of the bar to highlight in `summary`, if any.
///
/// In fixed mode the position counts the bars actually present, so it may
/// land on a different window when some are omitted, or on nothing when
/// fewer bars exist.
pub fn highlight_index(
    summary: &OpeningHoursSummary,
    mode: HighlightMode,
    fixed_position: usize,
) -> Option<usize> {
    match mode {
        HighlightMode::Fixed => (fixed_position < summary.windows.len()).then_some(fixed_position),
        HighlightMode::Max => summary
            .windows
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|(_, w)| w.total)
            .map(|(i, _)| i),
    }
}

pub fn panel_title(day_type: DayType) -> String {
    format!(
        "Total Order Counts for Each Time Range ({})",
        day_type.label()
    )
}

/// Length in cells of a bar for `total` when `max_total` fills `space`.
///
/// Non-positive totals get no bar; positive ones get at least one cell.
fn bar_length(total: i64, max_total: i64, space: usize) -> usize {
    if total <= 0 || max_total <= 0 || space == 0 {
        return 0;
    }
    let scaled = (total as f64 / max_total as f64 * space as f64).round() as usize;
    scaled.clamp(1, space)
}

/// Build one line per window, each `width` columns wide at most.
pub fn build_bar_lines<'a>(
    summary: &OpeningHoursSummary,
    highlight: Option<usize>,
    width: usize,
    direction: BarDirection,
    theme: &'a Theme,
) -> Vec<Line<'a>> {
    let values: Vec<String> = summary.windows.iter().map(|w| format_count(w.total)).collect();
    let value_width = values.iter().map(|v| v.width()).max().unwrap_or(0);
    let label_width = summary
        .windows
        .iter()
        .map(|w| w.window.width())
        .max()
        .unwrap_or(0);
    let space = width.saturating_sub(label_width + value_width + 2);
    let max_total = summary.max_total().unwrap_or(0);

    summary
        .windows
        .iter()
        .zip(values)
        .enumerate()
        .map(|(i, (entry, value))| {
            let filled = bar_length(entry.total, max_total, space);
            let bar = Span::styled("█".repeat(filled), theme.bar_style(highlight == Some(i)));

            match direction {
                BarDirection::LeftToRight => Line::from(vec![
                    Span::styled(format!("{:<label_width$}", entry.window), theme.bar_label),
                    Span::raw(" "),
                    bar,
                    Span::raw(" "),
                    Span::styled(value, theme.bar_value),
                ]),
                BarDirection::RightToLeft => {
                    let used = value.width() + filled + label_width + 2;
                    Line::from(vec![
                        Span::raw(" ".repeat(width.saturating_sub(used))),
                        Span::styled(value, theme.bar_value),
                        Span::raw(" "),
                        bar,
                        Span::raw(" "),
                        Span::styled(format!("{:>label_width$}", entry.window), theme.bar_label),
                    ])
                }
            }
        })
        .collect()
}

// ── Render ────────────────────────────────────────────────────────────────────

/// Render both panels into `area`, split evenly.
pub fn render_opening_hours(
    frame: &mut Frame,
    area: Rect,
    data: &DashboardData,
    mode: HighlightMode,
    theme: &Theme,
) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let working = &data.working_day_hours;
    render_opening_hours_panel(
        frame,
        left,
        working,
        highlight_index(working, mode, WORKING_DAY_HIGHLIGHT),
        BarDirection::LeftToRight,
        theme,
    );

    let holidays = &data.holiday_hours;
    render_opening_hours_panel(
        frame,
        right,
        holidays,
        highlight_index(holidays, mode, HOLIDAY_HIGHLIGHT),
        BarDirection::RightToLeft,
        theme,
    );
}

/// Render a single bordered panel for `summary`.
pub fn render_opening_hours_panel(
    frame: &mut Frame,
    area: Rect,
    summary: &OpeningHoursSummary,
    highlight: Option<usize>,
    direction: BarDirection,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Line::styled(format!(" {} ", panel_title(summary.day_type)), theme.chart_title))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if summary.is_empty() {
        frame.render_widget(no_data_paragraph(theme), inner);
        return;
    }

    let bars = build_bar_lines(summary, highlight, inner.width as usize, direction, theme);
    // Breathing room between bars when the panel is tall enough.
    let lines: Vec<Line> = if inner.height as usize >= bars.len() * 2 {
        bars.into_iter()
            .flat_map(|line| [line, Line::from("")])
            .collect()
    } else {
        bars
    };
    frame.render_widget(Paragraph::new(lines), inner);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
