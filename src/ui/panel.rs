//! Latest-status panel.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Theme;
use crate::data::{format_value, Summary};

/// Build the panel lines for a summary.
pub fn panel_lines(summary: &Summary) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("★ Latest Water Status: {}", summary.display_status),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("Latest Microplastic Reading: "),
            Span::styled(
                format_value(summary.latest_reading.value),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Timestamp: {}", summary.latest_reading.formatted_time())),
    ]
}

/// Render the latest status as a colored panel.
///
/// The background follows the display status: green for Good, orange for
/// Moderate, red for Unsafe.
pub fn render(frame: &mut Frame, summary: &Summary, theme: &Theme, area: Rect) {
    let style = theme.panel_style(summary.display_status);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(style)
        .style(style);

    let paragraph = Paragraph::new(panel_lines(summary))
        .alignment(Alignment::Center)
        .style(style)
        .block(block);

    frame.render_widget(paragraph, area);
}
