//! Timestamped sensor readings.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display format for reading timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single microplastic measurement.
///
/// Timestamps are stored in UTC and rendered in local time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Reading {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Returns the timestamp formatted as `YYYY-MM-DD HH:MM:SS` in local time.
    pub fn formatted_time(&self) -> String {
        format_timestamp(self.timestamp)
    }
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS` in the local timezone.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp string.
///
/// Accepts RFC 3339 (`2024-05-01T10:00:00Z`) or the display format
/// (`2024-05-01 10:00:00`), the latter interpreted as local time.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()?;
    naive.and_local_timezone(Local).earliest().map(|dt| dt.with_timezone(&Utc))
}

/// Format a reading value for display.
///
/// Whole numbers print without a fractional part.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}
