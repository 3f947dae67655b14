//! Terminal UI rendering using ratatui.
//!
//! Rendering is separate from computation: widgets take the
//! [`DashboardData`](crate::data::DashboardData) (or parts of it) and draw it,
//! never the other way round.
//!
//! ## Submodules
//!
//! - [`overview`]: Main view laying out the panel, sliders and charts
//! - [`panel`]: Latest water status panel, colored by display status
//! - [`controls`]: Threshold sliders
//! - [`distribution`]: Bar chart of readings per status
//! - [`timeseries`]: Reading levels over time with threshold lines
//! - [`readings`]: Table of every classified reading
//! - [`common`]: Shared components (header, tabs, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Tabs (common::render_tabs)           │
//! ├──────────────────────────────────────┤
//! │ Overview:  panel                     │
//! │            controls                  │
//! │            distribution | timeseries │
//! │ Readings:  readings table            │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top:
//!    - common::render_help
//! ```

pub mod common;
pub mod controls;
pub mod distribution;
pub mod overview;
pub mod panel;
pub mod readings;
pub mod theme;
pub mod timeseries;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};

/// Minimum terminal width for a usable display.
pub const MIN_WIDTH: u16 = 60;
/// Minimum terminal height for a usable display.
pub const MIN_HEIGHT: u16 = 20;

/// Draw one full frame for the app.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5u16.min(area.height));
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(1), // Tabs
        Constraint::Min(12),   // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    common::render_tabs(frame, app, chunks[1]);

    match app.current_view {
        View::Overview => overview::render(frame, app, chunks[2]),
        View::Readings => readings::render(frame, app, chunks[2]),
    }

    common::render_status_bar(frame, app, chunks[3]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Reading, ThresholdConfig};
    use crate::source::FixtureSource;
    use chrono::DateTime;
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        let readings = (0..20)
            .map(|i| Reading::new(DateTime::from_timestamp(i * 300, 0).unwrap(), (i * 30) as f64))
            .collect();
        let mut app = App::with_theme(
            Box::new(FixtureSource::new(readings)),
            ThresholdConfig::new(450.0, 300.0),
            Theme::dark(),
        );
        app.reload_data().unwrap();
        app
    }

    fn draw_text(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn small_terminal_shows_resize_hint() {
        let text = draw_text(&app(), 40, 10);
        assert!(text.contains("Terminal too small"));
    }

    #[test]
    fn header_warns_about_inverted_thresholds() {
        let text = draw_text(&app(), 120, 40);
        assert!(text.contains("AQUAWATCH"));
        assert!(text.contains("good > moderate threshold"));
        assert!(text.contains("1:Overview"));
    }

    #[test]
    fn readings_view_lists_statuses() {
        let mut app = app();
        app.set_view(View::Readings);
        let text = draw_text(&app, 120, 40);
        assert!(text.contains("Readings (20)"));
        assert!(text.contains("Good"));
        assert!(text.contains("Contaminated"));
    }

    #[test]
    fn help_overlay_is_drawn() {
        let mut app = app();
        app.toggle_help();
        let text = draw_text(&app, 120, 40);
        assert!(text.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn readings_view_shows_load_error() {
        let mut app = App::with_theme(
            Box::new(crate::source::RandomSource::seeded(0, 1)),
            ThresholdConfig::default(),
            Theme::dark(),
        );
        app.reload_data().unwrap();
        app.set_view(View::Readings);

        let text = draw_text(&app, 120, 40);
        assert!(text.contains("  no readings to summarize"));
        assert!(text.contains("Press r to regenerate readings."));
    }
}
