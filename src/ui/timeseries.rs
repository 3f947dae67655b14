//! Microplastic levels over time.
//!
//! Draws the readings as a filled area with a line on top, plus horizontal
//! reference lines at both thresholds.

use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::Theme;
use crate::data::{format_value, DashboardData};

/// Horizontal line across the x range at `y`.
fn threshold_line(y: f64, x_bounds: [f64; 2]) -> Vec<(f64, f64)> {
    vec![(x_bounds[0], y), (x_bounds[1], y)]
}

/// X-axis labels: time of the first, middle and last reading.
pub fn time_labels(data: &DashboardData) -> Vec<String> {
    let (start, end) = data.time_range();
    let middle = start + (end - start) / 2;
    [start, middle, end]
        .iter()
        .map(|t| t.with_timezone(&Local).format("%H:%M").to_string())
        .collect()
}

/// Y-axis labels: bottom, middle and top of the value range.
pub fn value_labels(bounds: [f64; 2]) -> Vec<String> {
    let middle = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], middle, bounds[1]].iter().map(|v| format_value(v.round())).collect()
}

/// Render the reading series with threshold reference lines.
pub fn render(frame: &mut Frame, data: &DashboardData, theme: &Theme, area: Rect) {
    let points = data.series();
    let x_bounds = data.x_bounds();
    let y_bounds = data.y_bounds();
    let good_line = threshold_line(data.thresholds.good_max, x_bounds);
    let moderate_line = threshold_line(data.thresholds.moderate_max, x_bounds);

    let datasets = vec![
        // Bars from the axis up to each point give the filled area
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(theme.fill).add_modifier(Modifier::DIM))
            .data(&points),
        Dataset::default()
            .name("Microplastics")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.series))
            .data(&points),
        Dataset::default()
            .name("Good Threshold")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.good))
            .data(&good_line),
        Dataset::default()
            .name("Moderate Threshold")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.moderate))
            .data(&moderate_line),
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(Span::styled(" Microplastic Levels Over Time ", bold))
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border)),
        )
        .x_axis(
            Axis::default()
                .title(Span::styled("Time", bold))
                .style(Style::default().fg(theme.border))
                .bounds(x_bounds)
                .labels(time_labels(data)),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Microplastic Level", bold))
                .style(Style::default().fg(theme.border))
                .bounds(y_bounds)
                .labels(value_labels(y_bounds)),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Reading, ThresholdConfig};
    use chrono::DateTime;
    use ratatui::{backend::TestBackend, Terminal};

    fn data() -> DashboardData {
        let readings: Vec<Reading> = (0..12)
            .map(|i| {
                Reading::new(DateTime::from_timestamp(i * 300, 0).unwrap(), (50 + i * 45) as f64)
            })
            .collect();
        DashboardData::build(&readings, ThresholdConfig::default()).unwrap()
    }

    #[test]
    fn threshold_line_spans_x_range() {
        assert_eq!(threshold_line(200.0, [0.0, 55.0]), vec![(0.0, 200.0), (55.0, 200.0)]);
    }

    #[test]
    fn value_labels_cover_bounds() {
        assert_eq!(value_labels([0.0, 660.0]), vec!["0", "330", "660"]);
    }

    #[test]
    fn time_labels_are_first_middle_last() {
        let labels = time_labels(&data());
        assert_eq!(labels.len(), 3);
        assert!(labels.iter().all(|l| l.len() == 5 && &l[2..3] == ":"));
    }

    #[test]
    fn renders_title_and_legend() {
        let data = data();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal
            .draw(|frame| render(frame, &data, &Theme::dark(), frame.area()))
            .unwrap();

        let text: String =
            terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Microplastic Levels Over Time"));
        assert!(text.contains("Good Threshold"));
        assert!(text.contains("Moderate Threshold"));
    }
}
