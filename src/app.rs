//! Application state and navigation logic.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::data::{DashboardData, Reading, ThresholdConfig, ThresholdKind};
use crate::report;
use crate::source::ReadingSource;
use crate::ui::Theme;

/// How long a temporary status message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// The current view/tab in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Status panel, threshold controls and both charts.
    Overview,
    /// Table of every classified reading.
    Readings,
}

impl View {
    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Overview => View::Readings,
            View::Readings => View::Overview,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        // Two views: previous and next coincide
        self.next()
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Readings => "Readings",
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub show_help: bool,

    // Data source
    source: Box<dyn ReadingSource>,
    readings: Vec<Reading>,
    pub data: Option<DashboardData>,
    pub load_error: Option<String>,

    // Threshold controls
    pub thresholds: ThresholdConfig,
    pub focused_threshold: ThresholdKind,
    pub threshold_step: f64,

    // Readings view
    pub selected_reading_index: usize,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given source and thresholds.
    ///
    /// The theme is picked from the terminal background.
    pub fn new(source: Box<dyn ReadingSource>, thresholds: ThresholdConfig) -> Self {
        Self::with_theme(source, thresholds, Theme::auto_detect())
    }

    /// Create a new App with an explicit theme.
    pub fn with_theme(
        source: Box<dyn ReadingSource>,
        thresholds: ThresholdConfig,
        theme: Theme,
    ) -> Self {
        Self {
            running: true,
            current_view: View::Overview,
            show_help: false,
            source,
            readings: Vec::new(),
            data: None,
            load_error: None,
            thresholds,
            focused_threshold: ThresholdKind::default(),
            threshold_step: 10.0,
            selected_reading_index: 0,
            theme,
            status_message: None,
        }
    }

    /// Set how far one adjustment moves a threshold.
    pub fn with_threshold_step(mut self, step: f64) -> Self {
        self.threshold_step = step;
        self
    }

    /// Returns a description of the current reading source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_MESSAGE_TTL {
                return Some(msg);
            }
        }
        None
    }

    /// Poll the source for a new batch of readings.
    ///
    /// Returns Ok(true) if a new batch was received and the dashboard was
    /// rebuilt, Ok(false) otherwise.
    pub fn reload_data(&mut self) -> Result<bool> {
        match self.source.poll() {
            Some(readings) => {
                info!(count = readings.len(), source = self.source.description(), "new readings");
                self.readings = readings;
                self.recompute();
                Ok(true)
            }
            None => {
                if let Some(err) = self.source.error() {
                    self.load_error = Some(err.to_string());
                }
                Ok(false)
            }
        }
    }

    /// Rebuild the dashboard from the retained readings and current thresholds.
    pub fn recompute(&mut self) {
        match DashboardData::build(&self.readings, self.thresholds) {
            Ok(data) => {
                let max = data.readings.len().saturating_sub(1);
                self.selected_reading_index = self.selected_reading_index.min(max);
                self.data = Some(data);
                // A failing source stays reported until it delivers again
                self.load_error = self.source.error().map(str::to_string);
            }
            Err(e) => {
                warn!(error = %e, "cannot build dashboard");
                self.data = None;
                self.load_error = Some(e.to_string());
            }
        }
    }

    /// Move the focused threshold by `steps` increments and reclassify.
    ///
    /// Readings are kept; only classification changes.
    pub fn adjust_threshold(&mut self, steps: f64) {
        let updated = self.thresholds.adjusted(self.focused_threshold, steps * self.threshold_step);
        if updated == self.thresholds {
            return;
        }

        debug!(
            good_max = updated.good_max,
            moderate_max = updated.moderate_max,
            "thresholds changed"
        );
        if updated.is_inverted() && !self.thresholds.is_inverted() {
            warn!(
                good_max = updated.good_max,
                moderate_max = updated.moderate_max,
                "good threshold moved above moderate threshold"
            );
        }

        self.thresholds = updated;
        self.recompute();
    }

    /// Switch which threshold the adjustment keys move.
    pub fn toggle_threshold_focus(&mut self) {
        self.focused_threshold = self.focused_threshold.toggle();
    }

    /// Restore both thresholds to their defaults.
    pub fn reset_thresholds(&mut self) {
        self.thresholds = ThresholdConfig::default();
        self.recompute();
        self.set_status_message("Thresholds reset".to_string());
    }

    /// Switch to the next view.
    pub fn next_view(&mut self) {
        self.current_view = self.current_view.next();
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.current_view = self.current_view.prev();
    }

    /// Switch to a specific view.
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    fn reading_count(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.readings.len())
    }

    /// Move selection down by one item.
    pub fn select_next(&mut self) {
        self.select_next_n(1);
    }

    /// Move selection up by one item.
    pub fn select_prev(&mut self) {
        self.select_prev_n(1);
    }

    /// Move selection down by n items.
    pub fn select_next_n(&mut self, n: usize) {
        let max = self.reading_count().saturating_sub(1);
        self.selected_reading_index = (self.selected_reading_index + n).min(max);
    }

    /// Move selection up by n items.
    pub fn select_prev_n(&mut self, n: usize) {
        self.selected_reading_index = self.selected_reading_index.saturating_sub(n);
    }

    /// Jump to the first reading.
    pub fn select_first(&mut self) {
        self.selected_reading_index = 0;
    }

    /// Jump to the last reading.
    pub fn select_last(&mut self) {
        self.selected_reading_index = self.reading_count().saturating_sub(1);
    }

    /// Close the help overlay or return to the overview.
    pub fn go_back(&mut self) {
        if self.show_help {
            self.show_help = false;
        } else {
            self.current_view = View::Overview;
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the current dashboard to a JSON file.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        let Some(ref data) = self.data else {
            anyhow::bail!("No data to export");
        };
        report::write_report(data, path)
    }
}
