use ratatui::style::{Color, Modifier, Style};

/// Colour of the highlighted opening-hours bar, `#72BCD4`.
pub const HIGHLIGHT_BLUE: Color = Color::Rgb(0x72, 0xBC, 0xD4);

/// Colour of every other opening-hours bar, `#D3D3D3`.
pub const NEUTRAL_GRAY: Color = Color::Rgb(0xD3, 0xD3, 0xD3);

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`. Background values
/// up to 6 are dark, higher values light. If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// All styles used by the dashboard widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub header_accent: Style,
    pub separator: Style,
    pub subheading: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub dim: Style,
    pub label: Style,
    pub value: Style,
    pub warning: Style,

    // ── Bars ─────────────────────────────────────────────────────────────────
    /// Every bar except the highlighted one.
    pub bar_default: Style,
    pub bar_highlight: Style,
    /// Window name next to a bar.
    pub bar_label: Style,
    /// Total printed at the tip of a bar.
    pub bar_value: Style,

    // ── Monthly chart ────────────────────────────────────────────────────────
    pub casual_series: Style,
    pub registered_series: Style,
    pub axis: Style,
    pub chart_title: Style,
    pub border: Style,

    // ── Date picker ──────────────────────────────────────────────────────────
    pub picker_title: Style,
    pub picker_field: Style,
    /// The field that arrow keys currently move.
    pub picker_focus: Style,

    pub footer: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_accent: Style::default().fg(Color::Yellow),
            separator: Style::default().fg(Color::DarkGray),
            subheading: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            dim: Style::default().fg(Color::DarkGray),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            warning: Style::default().fg(Color::Yellow),

            bar_default: Style::default().fg(NEUTRAL_GRAY),
            bar_highlight: Style::default().fg(HIGHLIGHT_BLUE),
            bar_label: Style::default().fg(Color::Gray),
            bar_value: Style::default().fg(Color::White),

            casual_series: Style::default().fg(Color::Rgb(0x1F, 0x77, 0xB4)),
            registered_series: Style::default().fg(Color::Rgb(0xFF, 0x7F, 0x0E)),
            axis: Style::default().fg(Color::Gray),
            chart_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),

            picker_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            picker_field: Style::default().fg(Color::White),
            picker_focus: Style::default()
                .fg(Color::Black)
                .bg(HIGHLIGHT_BLUE)
                .add_modifier(Modifier::BOLD),

            footer: Style::default().fg(Color::DarkGray),
        }
    }

    /// Light-background terminal theme.
    ///
    /// The neutral bar colour is too pale on a light canvas, so plain bars
    /// use a darker grey here while the highlight keeps its blue.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_accent: Style::default().fg(Color::Magenta),
            separator: Style::default().fg(Color::Gray),
            subheading: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            dim: Style::default().fg(Color::Gray),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            warning: Style::default().fg(Color::Red),

            bar_default: Style::default().fg(Color::Gray),
            bar_highlight: Style::default().fg(HIGHLIGHT_BLUE),
            bar_label: Style::default().fg(Color::DarkGray),
            bar_value: Style::default().fg(Color::Black),

            casual_series: Style::default().fg(Color::Rgb(0x1F, 0x77, 0xB4)),
            registered_series: Style::default().fg(Color::Rgb(0xFF, 0x7F, 0x0E)),
            axis: Style::default().fg(Color::DarkGray),
            chart_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Gray),

            picker_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            picker_field: Style::default().fg(Color::Black),
            picker_focus: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),

            footer: Style::default().fg(Color::Gray),
        }
    }

    /// Sixteen-colour theme without modifiers, for terminals lacking RGB.
    pub fn classic() -> Self {
        Self {
            header: Style::default().fg(Color::Cyan),
            header_accent: Style::default().fg(Color::Yellow),
            separator: Style::default().fg(Color::White),
            subheading: Style::default().fg(Color::White),

            dim: Style::default().fg(Color::Gray),
            label: Style::default().fg(Color::White),
            value: Style::default().fg(Color::White),
            warning: Style::default().fg(Color::Yellow),

            bar_default: Style::default().fg(Color::Gray),
            bar_highlight: Style::default().fg(Color::Cyan),
            bar_label: Style::default().fg(Color::White),
            bar_value: Style::default().fg(Color::White),

            casual_series: Style::default().fg(Color::Blue),
            registered_series: Style::default().fg(Color::Yellow),
            axis: Style::default().fg(Color::White),
            chart_title: Style::default().fg(Color::White),
            border: Style::default().fg(Color::White),

            picker_title: Style::default().fg(Color::Cyan),
            picker_field: Style::default().fg(Color::White),
            picker_focus: Style::default().fg(Color::Black).bg(Color::Cyan),

            footer: Style::default().fg(Color::Gray),
        }
    }

    /// Pick [`light`](Self::light) or [`dark`](Self::dark) from the
    /// detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            BackgroundType::Dark => Self::dark(),
        }
    }

    /// Construct a theme by name. Falls back to `auto_detect` for unknown
    /// names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    pub fn bar_style(&self, highlighted: bool) -> Style {
        if highlighted {
            self.bar_highlight
        } else {
            self.bar_default
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
