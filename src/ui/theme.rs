//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::{DisplayStatus, Status};

/// Panel green for Good.
const GOOD_GREEN: Color = Color::Rgb(0x34, 0xa8, 0x53);
/// Panel orange for Moderate.
const MODERATE_ORANGE: Color = Color::Rgb(0xff, 0xa5, 0x00);
/// Panel red for Unsafe.
const UNSAFE_RED: Color = Color::Rgb(0xea, 0x43, 0x35);

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    pub good: Color,
    pub moderate: Color,
    pub unsafe_: Color,
    /// Line color for the reading series.
    pub series: Color,
    /// Fill color under the reading series.
    pub fill: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Text color on top of the status panel background.
    pub panel_text: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Style for selected/highlighted rows.
    pub selected: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            good: GOOD_GREEN,
            moderate: MODERATE_ORANGE,
            unsafe_: UNSAFE_RED,
            series: Color::Rgb(0x46, 0x82, 0xb4),
            fill: Color::Rgb(0x87, 0xce, 0xeb),
            border: Color::Gray,
            panel_text: Color::White,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            good: GOOD_GREEN,
            moderate: MODERATE_ORANGE,
            unsafe_: UNSAFE_RED,
            series: Color::Rgb(0x46, 0x82, 0xb4),
            fill: Color::Rgb(0x5f, 0x9e, 0xc8),
            border: Color::DarkGray,
            panel_text: Color::White,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Color for a user-facing status.
    pub fn display_color(&self, status: DisplayStatus) -> Color {
        match status {
            DisplayStatus::Good => self.good,
            DisplayStatus::Moderate => self.moderate,
            DisplayStatus::Unsafe => self.unsafe_,
        }
    }

    /// Color for a classification status.
    pub fn status_color(&self, status: Status) -> Color {
        self.display_color(status.display())
    }

    /// Foreground style for a classification status.
    pub fn status_style(&self, status: Status) -> Style {
        match status {
            Status::Contaminated => {
                Style::default().fg(self.unsafe_).add_modifier(Modifier::BOLD)
            }
            _ => Style::default().fg(self.status_color(status)),
        }
    }

    /// Filled background style for the status panel.
    pub fn panel_style(&self, status: DisplayStatus) -> Style {
        Style::default()
            .bg(self.display_color(status))
            .fg(self.panel_text)
            .add_modifier(Modifier::BOLD)
    }
}
