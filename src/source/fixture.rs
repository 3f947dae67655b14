//! Fixed in-memory reading source.

use super::ReadingSource;
use crate::data::Reading;

/// A source that hands out a fixed batch of readings once.
///
/// Useful for tests and demos where the data must not change between
/// frames. Call [`FixtureSource::rearm`] to make the batch available again.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    readings: Vec<Reading>,
    description: String,
    delivered: bool,
}

impl FixtureSource {
    pub fn new(readings: Vec<Reading>) -> Self {
        let description = format!("fixture: {} readings", readings.len());
        Self {
            readings,
            description,
            delivered: false,
        }
    }

    /// Make the batch available to the next poll again.
    pub fn rearm(&mut self) {
        self.delivered = false;
    }
}

impl ReadingSource for FixtureSource {
    fn poll(&mut self) -> Option<Vec<Reading>> {
        if self.delivered {
            return None;
        }
        self.delivered = true;
        Some(self.readings.clone())
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        None
    }
}
