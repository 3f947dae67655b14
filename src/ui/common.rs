//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};
use crate::data::Status;

/// Render the header bar with the latest status and distribution counts.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = Span::styled(" ≈ AQUAWATCH ", Style::default().add_modifier(Modifier::BOLD));

    let Some(ref data) = app.data else {
        let line = Line::from(vec![title, Span::raw("| Loading...")]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    };

    let summary = &data.summary;
    let counts = &summary.counts_by_status;

    let mut spans = vec![
        Span::styled("● ", app.theme.status_style(summary.latest_status)),
        title,
        Span::raw("│ "),
    ];

    for status in Status::ALL {
        let count = counts.get(status);
        let style = if count > 0 {
            app.theme.status_style(status)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        spans.push(Span::styled(count.to_string(), style));
        spans.push(Span::raw(format!(" {} ", status.name().to_lowercase())));
    }

    spans.push(Span::raw("│ "));
    spans.push(Span::styled(
        counts.total().to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw(" readings"));

    if data.thresholds.is_inverted() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            "⚠ good > moderate threshold",
            Style::default().fg(app.theme.moderate).add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the tab bar showing available views.
///
/// Highlights the currently active view.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = vec![Line::from(" 1:Overview "), Line::from(" 2:Readings ")];

    let selected = match app.current_view {
        View::Overview => 0,
        View::Readings => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows: source, time since last computation, available controls.
/// Also displays temporary status messages and errors.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = if let Some(ref err) = app.load_error {
        format!(" Error: {} | r:retry q:quit", err)
    } else if let Some(ref data) = app.data {
        let controls = match app.current_view {
            View::Overview => "t:threshold ←→:adjust r:regenerate e:export ?:help q:quit",
            View::Readings => "↑↓:select Tab:switch r:regenerate ?:help q:quit",
        };

        format!(
            " {} | Updated {:.1}s ago | {}",
            app.source_description(),
            data.computed_at.elapsed().as_secs_f64(),
            controls,
        )
    } else {
        " Loading... | q:quit".to_string()
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the placeholder shown while there is no dashboard to draw.
///
/// Shows the load error if there is one.
pub fn render_unavailable(frame: &mut Frame, app: &App, title: &str, area: Rect) {
    let message = app.load_error.as_deref().unwrap_or("Waiting for readings...");

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(app.theme.unsafe_).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Press r to regenerate readings.",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let section = |title: &'static str| {
        Line::from(vec![Span::styled(title, Style::default().add_modifier(Modifier::BOLD))])
    };

    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        section(" Thresholds"),
        Line::from("  g / m       Focus good / moderate"),
        Line::from("  t           Toggle focus"),
        Line::from("  ←/→ h/l     Adjust by step"),
        Line::from("  H / L       Adjust by 1"),
        Line::from("  0           Reset to defaults"),
        Line::from(""),
        section(" Navigation"),
        Line::from("  Tab 1 2     Switch views"),
        Line::from("  ↑/↓ j/k     Select reading"),
        Line::from("  PgUp/PgDn   Jump 10 readings"),
        Line::from("  Esc         Back to overview"),
        Line::from(""),
        section(" General"),
        Line::from("  r           Regenerate readings"),
        Line::from("  e           Export to JSON"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 23u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
