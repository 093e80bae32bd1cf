//! Main application state and TUI event loop for the bike sharing dashboard.
//!
//! [`App`] borrows the loaded table, owns the theme and date picker, and
//! keeps the summaries for the current range. Range edits re-run the
//! pipeline; everything else only redraws.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dashboard_core::error::{DashboardError, Result};
use dashboard_core::models::{DateRange, RentalTable};
use dashboard_data::pipeline::{build_dashboard, DashboardData};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing::{debug, info};

use crate::components::date_picker::DateRangePicker;
use crate::components::header::Header;
use crate::monthly_view;
use crate::opening_hours_view::{self, HighlightMode};
use crate::themes::Theme;

pub const OPENING_HOURS_HEADING: &str = "Best Opening Hours";
pub const MONTHLY_HEADING: &str = "Casual vs Registered Orders in Last 5 Months";
pub const FOOTER_CAPTION: &str = "Copyright (c) Dicoding 2024";

/// Width of the date-picker sidebar in columns.
const SIDEBAR_WIDTH: u16 = 30;

// ── App ───────────────────────────────────────────────────────────────────────

pub struct App<'a> {
    table: &'a RentalTable,
    pub theme: Theme,
    pub picker: DateRangePicker,
    pub highlight: HighlightMode,
    /// Summaries for `picker.range()`.
    pub data: DashboardData,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Build the app over `table`, preselecting `initial` and computing the
    /// first set of summaries.
    pub fn new(
        table: &'a RentalTable,
        initial: DateRange,
        theme_name: &str,
        highlight: HighlightMode,
    ) -> Result<Self> {
        let bounds = table
            .full_range()
            .ok_or_else(|| DashboardError::Config("cannot open the dashboard on an empty table".into()))?;
        let picker = DateRangePicker::new(bounds, initial);
        let data = build_dashboard(table, picker.range());

        Ok(Self {
            table,
            theme: Theme::from_name(theme_name),
            picker,
            highlight,
            data,
            should_quit: false,
        })
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the dashboard until the user quits.
    ///
    /// Polls with a 250 ms timeout and exits on `q`, `Q`, `Esc` or
    /// `Ctrl+C`. The terminal is restored even when drawing fails.
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()
            .map_err(|e| DashboardError::Terminal(format!("cannot enable raw mode: {e}")))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| DashboardError::Terminal(format!("cannot enter alternate screen: {e}")))?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)
            .map_err(|e| DashboardError::Terminal(format!("cannot initialise terminal: {e}")))?;

        info!("Dashboard started on {} to {}", self.data.range.start, self.data.range.end);
        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(result?)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Apply one key event: quit keys set `should_quit`, anything else goes
    /// to the date picker and re-runs the pipeline if the range moved.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            code => {
                if self.picker.handle_key(code) {
                    self.refresh();
                }
            }
        }
    }

    fn refresh(&mut self) {
        let range = self.picker.range();
        self.data = build_dashboard(self.table, range);
        debug!(
            "Range changed to {} .. {}, {} rows",
            range.start, range.end, self.data.rows_selected
        );
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Draw the whole page into `frame`.
    pub fn render(&self, frame: &mut Frame) {
        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let range = self.data.range;
        let header = Header::new(range.start, range.end, self.data.rows_selected, &self.theme);
        frame.render_widget(Paragraph::new(Text::from(header.to_lines())), header_area);

        let [sidebar_area, main_area] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(body_area);
        self.render_sidebar(frame, sidebar_area);
        self.render_main(frame, main_area);

        frame.render_widget(Paragraph::new(self.footer_line()), footer_area);
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(self.theme.border);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(Text::from(self.picker.to_lines(&self.theme))), inner);
    }

    fn render_main(&self, frame: &mut Frame, area: Rect) {
        let [hours_heading, hours_area, monthly_heading, monthly_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Percentage(50),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        frame.render_widget(self.subheading(OPENING_HOURS_HEADING), hours_heading);
        opening_hours_view::render_opening_hours(
            frame,
            hours_area,
            &self.data,
            self.highlight,
            &self.theme,
        );

        frame.render_widget(self.subheading(MONTHLY_HEADING), monthly_heading);
        monthly_view::render_monthly_chart(frame, monthly_area, &self.data, &self.theme);
    }

    fn subheading(&self, text: &'static str) -> Paragraph<'_> {
        Paragraph::new(Line::from(Span::styled(text, self.theme.subheading)))
    }

    fn footer_line(&self) -> Line<'_> {
        Line::from(vec![
            Span::styled(FOOTER_CAPTION, self.theme.footer),
            Span::styled("   q quit · Tab switch field · arrows move date · r reset", self.theme.dim),
        ])
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
