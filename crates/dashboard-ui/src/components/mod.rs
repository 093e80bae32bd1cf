pub mod date_picker;
pub mod header;

use ratatui::layout::Alignment;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::themes::Theme;

/// Note shown in place of a chart whose summary is empty.
pub const NO_DATA_NOTE: &str = "No data in selected range";

/// Centered placeholder paragraph for an empty chart.
pub fn no_data_paragraph(theme: &Theme) -> Paragraph<'_> {
    Paragraph::new(Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(NO_DATA_NOTE, theme.dim)),
    ]))
    .alignment(Alignment::Center)
}
