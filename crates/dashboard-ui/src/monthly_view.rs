//! Casual vs registered monthly orders line chart.

use std::collections::BTreeSet;

use dashboard_core::formatting::{format_compact, month_label};
use dashboard_core::models::MonthlyBookings;
use dashboard_data::pipeline::DashboardData;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

use crate::components::no_data_paragraph;
use crate::themes::Theme;

pub const CHART_TITLE: &str = "Monthly Casual vs Registered Orders";
pub const X_AXIS_TITLE: &str = "Month";
pub const Y_AXIS_TITLE: &str = "Number of Orders";

/// Most month labels printed under the x axis before thinning out.
const MAX_X_LABELS: usize = 6;

/// Sorted union of the month keys of both series.
pub fn month_axis(casual: &MonthlyBookings, registered: &MonthlyBookings) -> Vec<String> {
    casual
        .months
        .iter()
        .chain(&registered.months)
        .map(|m| m.month.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Plot points for `bookings`, x being the month's index on `axis`.
pub fn series_points(bookings: &MonthlyBookings, axis: &[String]) -> Vec<(f64, f64)> {
    bookings
        .months
        .iter()
        .filter_map(|m| {
            let x = axis.iter().position(|key| *key == m.month)?;
            Some((x as f64, m.total as f64))
        })
        .collect()
}

/// Month labels to print under the x axis.
///
/// Short axes label every month; longer ones show first, middle and last.
pub fn x_labels(axis: &[String]) -> Vec<String> {
    if axis.len() <= MAX_X_LABELS {
        return axis.iter().map(|m| month_label(m)).collect();
    }
    [0, (axis.len() - 1) / 2, axis.len() - 1]
        .iter()
        .map(|&i| month_label(&axis[i]))
        .collect()
}

/// Upper bound of the y axis, a little above the largest value.
fn y_upper(data: &DashboardData) -> f64 {
    let largest = data
        .casual_monthly
        .months
        .iter()
        .chain(&data.registered_monthly.months)
        .map(|m| m.total)
        .max()
        .unwrap_or(0)
        .max(1);
    largest.saturating_add(largest / 10) as f64
}

// ── Render ────────────────────────────────────────────────────────────────────

pub fn render_monthly_chart(frame: &mut Frame, area: Rect, data: &DashboardData, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Line::styled(format!(" {} ", CHART_TITLE), theme.chart_title))
        .title_alignment(Alignment::Center);

    if data.casual_monthly.is_empty() && data.registered_monthly.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(no_data_paragraph(theme), inner);
        return;
    }

    let axis = month_axis(&data.casual_monthly, &data.registered_monthly);
    let casual = series_points(&data.casual_monthly, &axis);
    let registered = series_points(&data.registered_monthly, &axis);

    let datasets = vec![
        Dataset::default()
            .name(data.casual_monthly.rider_type.series_label())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme.casual_series)
            .data(&casual),
        Dataset::default()
            .name(data.registered_monthly.rider_type.series_label())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme.registered_series)
            .data(&registered),
        // Point markers on top of the lines; unnamed so the legend skips them.
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(theme.casual_series)
            .data(&casual),
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(theme.registered_series)
            .data(&registered),
    ];

    let x_max = axis.len().saturating_sub(1).max(1) as f64;
    let y_max = y_upper(data);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title(Line::styled(X_AXIS_TITLE, theme.axis))
                .style(theme.axis)
                .bounds([0.0, x_max])
                .labels(x_labels(&axis)),
        )
        .y_axis(
            Axis::default()
                .title(Line::styled(Y_AXIS_TITLE, theme.axis))
                .style(theme.axis)
                .bounds([0.0, y_max])
                .labels(vec![
                    "0".to_string(),
                    format_compact((y_max / 2.0) as i64),
                    format_compact(y_max as i64),
                ]),
        )
        .legend_position(Some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    frame.render_widget(chart, area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
