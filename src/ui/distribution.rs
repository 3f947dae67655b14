//! Status distribution chart.
//!
//! One bar per status, labelled with its share of all readings.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use super::Theme;
use crate::data::{Status, StatusCounts};

/// Gap between bars, in columns.
const BAR_GAP: u16 = 2;

/// Label printed inside a bar, e.g. `12 (24.0%)`.
pub fn bar_text(counts: &StatusCounts, status: Status) -> String {
    format!("{} ({:.1}%)", counts.get(status), counts.percentage(status))
}

/// Render the distribution of readings across statuses.
///
/// Statuses with no readings are still shown so bar positions stay stable
/// while thresholds move.
pub fn render(frame: &mut Frame, counts: &StatusCounts, theme: &Theme, area: Rect) {
    let bars: Vec<Bar> = Status::ALL
        .iter()
        .map(|&status| {
            let color = theme.status_color(status);
            Bar::default()
                .value(counts.get(status) as u64)
                .label(Line::from(status.name()))
                .text_value(bar_text(counts, status))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default().bg(color).fg(theme.panel_text).add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width.saturating_sub(BAR_GAP * 2) / 3).max(1);

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Water Quality Status Distribution ")
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .max(counts.total().max(1) as u64);

    frame.render_widget(chart, area);
}
