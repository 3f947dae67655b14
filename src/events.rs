use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, View};
use crate::data::ThresholdKind;

/// Default export file for the `e` key.
pub const EXPORT_PATH: &str = "aquawatch_export.json";

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // Shift moves thresholds in single units
    let steps = if key.modifiers.contains(KeyModifiers::SHIFT) {
        1.0 / app.threshold_step
    } else {
        1.0
    };

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // View switching
        KeyCode::Tab => app.next_view(),
        KeyCode::BackTab => app.prev_view(),
        KeyCode::Char('1') => app.set_view(View::Overview),
        KeyCode::Char('2') => app.set_view(View::Readings),

        // Threshold controls
        KeyCode::Char('g') => app.focused_threshold = ThresholdKind::Good,
        KeyCode::Char('m') => app.focused_threshold = ThresholdKind::Moderate,
        KeyCode::Char('t') => app.toggle_threshold_focus(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Char('=') => {
            app.adjust_threshold(steps)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => app.adjust_threshold(-steps),
        KeyCode::Char('L') => app.adjust_threshold(1.0 / app.threshold_step),
        KeyCode::Char('H') => app.adjust_threshold(-1.0 / app.threshold_step),
        KeyCode::Char('0') => app.reset_thresholds(),

        // Readings navigation
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::PageUp => app.select_prev_n(10),
        KeyCode::PageDown => app.select_next_n(10),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        KeyCode::Esc | KeyCode::Backspace => app.go_back(),

        // Regenerate / reload
        KeyCode::Char('r') => {
            if let Ok(true) = app.reload_data() {
                app.set_status_message("New readings loaded".to_string());
            }
        }

        KeyCode::Char('?') => app.toggle_help(),

        KeyCode::Char('e') => {
            let export_path = PathBuf::from(EXPORT_PATH);
            match app.export_state(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => match app.current_view {
            View::Readings => app.select_prev(),
            View::Overview => app.adjust_threshold(1.0),
        },
        MouseEventKind::ScrollDown => match app.current_view {
            View::Readings => app.select_next(),
            View::Overview => app.adjust_threshold(-1.0),
        },

        // Tab clicks on row 1, after the header
        MouseEventKind::Down(MouseButton::Left) if mouse.row == 1 => {
            // Approximate tab positions: Overview (0-13), Readings (14-27)
            if mouse.column < 14 {
                app.set_view(View::Overview);
            } else if mouse.column < 28 {
                app.set_view(View::Readings);
            }
        }

        MouseEventKind::Down(MouseButton::Right) => app.go_back(),

        _ => {}
    }
}
