//! The derived dashboard view handed to the renderer.

use std::time::Instant;

use chrono::{DateTime, Utc};

use super::reading::Reading;
use super::summary::{classify_readings, summarize, ClassifiedReading, Summary};
use super::thresholds::ThresholdConfig;
use crate::error::DashboardError;

/// Everything the presentation layer needs for one frame of data.
///
/// Built from scratch whenever readings or thresholds change; never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// Classified readings, ascending by timestamp.
    pub readings: Vec<ClassifiedReading>,
    pub summary: Summary,
    pub thresholds: ThresholdConfig,
    pub computed_at: Instant,
}

impl DashboardData {
    /// Classify and summarize a batch of readings.
    pub fn build(readings: &[Reading], thresholds: ThresholdConfig) -> Result<Self, DashboardError> {
        let classified = classify_readings(readings, &thresholds)?;
        let summary = summarize(&classified)?;

        Ok(Self {
            readings: classified,
            summary,
            thresholds,
            computed_at: Instant::now(),
        })
    }

    /// Time span covered by the readings.
    pub fn time_range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        // build() guarantees at least one reading
        let first = self.readings.first().map(|r| r.reading.timestamp);
        let last = self.readings.last().map(|r| r.reading.timestamp);
        let latest = self.summary.latest_reading.timestamp;
        (first.unwrap_or(latest), last.unwrap_or(latest))
    }

    /// Chart points as (minutes since the first reading, value).
    pub fn series(&self) -> Vec<(f64, f64)> {
        let (start, _) = self.time_range();
        self.readings
            .iter()
            .map(|r| (minutes_between(start, r.reading.timestamp), r.reading.value))
            .collect()
    }

    /// X-axis extent in minutes. Never zero-width.
    pub fn x_bounds(&self) -> [f64; 2] {
        let (start, end) = self.time_range();
        let span = minutes_between(start, end);
        [0.0, span.max(1.0)]
    }

    /// Y-axis extent covering every reading and both thresholds, with headroom.
    pub fn y_bounds(&self) -> [f64; 2] {
        let values = self
            .readings
            .iter()
            .map(|r| r.reading.value)
            .chain([self.thresholds.good_max, self.thresholds.moderate_max]);

        let (min, max) = values.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let top = if max > 0.0 { max * 1.1 } else { 1.0 };
        [min, top]
    }
}

fn minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_seconds() as f64 / 60.0
}
