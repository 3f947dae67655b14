//! Overview view: status panel, threshold sliders and both charts.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use super::{common, controls, distribution, panel, timeseries, Theme};
use crate::app::App;
use crate::data::{DashboardData, ThresholdKind};

/// Render the Overview view for the app's current data.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match app.data {
        Some(ref data) => render_dashboard(frame, data, app.focused_threshold, &app.theme, area),
        None => common::render_unavailable(frame, app, " Water Quality ", area),
    }
}

/// Lay out the dashboard widgets for one set of computed data.
///
/// Takes only plain data, so it can be drawn without an [`App`].
pub fn render_dashboard(
    frame: &mut Frame,
    data: &DashboardData,
    focused: ThresholdKind,
    theme: &Theme,
    area: Rect,
) {
    let chunks = Layout::vertical([
        Constraint::Length(5), // Status panel
        Constraint::Length(3), // Threshold sliders
        Constraint::Min(8),    // Charts
    ])
    .split(area);

    panel::render(frame, &data.summary, theme, chunks[0]);
    controls::render(frame, &data.thresholds, focused, theme, chunks[1]);

    let charts =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(chunks[2]);

    distribution::render(frame, &data.summary.counts_by_status, theme, charts[0]);
    timeseries::render(frame, data, theme, charts[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Reading, ThresholdConfig};
    use crate::source::{FixtureSource, RandomSource};
    use chrono::DateTime;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 36)).unwrap();
        terminal.draw(|frame| render(frame, app, frame.area())).unwrap();
        terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn renders_every_widget() {
        let readings = vec![
            Reading::new(DateTime::from_timestamp(0, 0).unwrap(), 120.0),
            Reading::new(DateTime::from_timestamp(300, 0).unwrap(), 480.0),
        ];
        let mut app = App::with_theme(
            Box::new(FixtureSource::new(readings)),
            ThresholdConfig::default(),
            Theme::dark(),
        );
        app.reload_data().unwrap();

        let text = draw(&app);
        assert!(text.contains("Latest Water Status: Unsafe"));
        assert!(text.contains("Latest Microplastic Reading: 480"));
        assert!(text.contains("Good max microplastics"));
        assert!(text.contains("Water Quality Status Distribution"));
        assert!(text.contains("Microplastic Levels Over Time"));
    }

    #[test]
    fn renders_error_instead_of_panel_for_empty_batch() {
        let mut app = App::with_theme(
            Box::new(RandomSource::seeded(0, 1)),
            ThresholdConfig::default(),
            Theme::dark(),
        );
        app.reload_data().unwrap();

        let text = draw(&app);
        assert!(text.contains("no readings to summarize"));
        assert!(!text.contains("Latest Water Status"));
    }
}
