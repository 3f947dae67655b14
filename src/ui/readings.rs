//! Readings table view.
//!
//! Lists every classified reading, newest last, with its status.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use super::common;
use crate::app::App;
use crate::data::format_value;

/// Render the Readings view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        common::render_unavailable(frame, app, " Readings ", area);
        return;
    };

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Time"),
        Cell::from("Microplastics"),
        Cell::from("Status"),
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = data
        .readings
        .iter()
        .enumerate()
        .map(|(i, r)| {
            Row::new(vec![
                Cell::from((i + 1).to_string()),
                Cell::from(r.reading.formatted_time()),
                Cell::from(format_value(r.reading.value)),
                Cell::from(r.status.name()).style(app.theme.status_style(r.status)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(21),
        Constraint::Fill(1),
        Constraint::Length(14),
    ];

    let selected = app.selected_reading_index.min(data.readings.len().saturating_sub(1));

    let title = format!(
        " Readings ({}) [{}/{}] good<{} moderate<{} ",
        data.readings.len(),
        selected + 1,
        data.readings.len(),
        format_value(data.thresholds.good_max),
        format_value(data.thresholds.moderate_max),
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(table, area, &mut state);
}
