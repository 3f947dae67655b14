//! Threshold slider controls.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Gauge},
    Frame,
};

use super::Theme;
use crate::data::{format_value, ThresholdConfig, ThresholdKind, THRESHOLD_MAX, THRESHOLD_MIN};

/// Position of a threshold within the adjustable range, in `[0, 1]`.
pub fn slider_ratio(value: f64) -> f64 {
    let ratio = (value - THRESHOLD_MIN) / (THRESHOLD_MAX - THRESHOLD_MIN);
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Render both threshold sliders side by side, highlighting the focused one.
pub fn render(
    frame: &mut Frame,
    thresholds: &ThresholdConfig,
    focused: ThresholdKind,
    theme: &Theme,
    area: Rect,
) {
    let chunks =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

    for (kind, chunk) in [ThresholdKind::Good, ThresholdKind::Moderate].into_iter().zip(chunks.iter())
    {
        let value = thresholds.get(kind);
        let color = match kind {
            ThresholdKind::Good => theme.good,
            ThresholdKind::Moderate => theme.moderate,
        };

        let border_style = if kind == focused {
            Style::default().fg(theme.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.border)
        };
        let marker = if kind == focused { "▶ " } else { "" };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(format!(" {}{} ", marker, kind.label()))
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(border_style),
            )
            .gauge_style(Style::default().fg(color))
            .ratio(slider_ratio(value))
            .label(Span::styled(
                format!("{} / {}", format_value(value), format_value(THRESHOLD_MAX)),
                Style::default().add_modifier(Modifier::BOLD),
            ));

        frame.render_widget(gauge, *chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(slider_ratio(0.0), 0.0);
        assert_eq!(slider_ratio(300.0), 0.5);
        assert_eq!(slider_ratio(600.0), 1.0);
        assert_eq!(slider_ratio(900.0), 1.0);
        assert_eq!(slider_ratio(-5.0), 0.0);
        assert_eq!(slider_ratio(f64::NAN), 0.0);
    }

    #[test]
    fn renders_both_sliders() {
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        let thresholds = ThresholdConfig::default();

        terminal
            .draw(|frame| {
                render(frame, &thresholds, ThresholdKind::Moderate, &Theme::dark(), frame.area())
            })
            .unwrap();

        let text: String =
            terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Good max microplastics"));
        assert!(text.contains("▶ Moderate max microplastics"));
        assert!(text.contains("200 / 600"));
        assert!(text.contains("400 / 600"));
    }
}
