//! Reading source abstraction.
//!
//! This module provides a trait-based abstraction for obtaining batches of
//! readings, so the dashboard does not care whether they come from the
//! random generator, a fixed fixture, or a replay file.

mod file;
mod fixture;
mod random;
mod record;

pub use file::FileSource;
pub use fixture::FixtureSource;
pub use random::{
    RandomSource, DEFAULT_COUNT, DEFAULT_INTERVAL_MINUTES, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE,
};
pub use record::{parse_records, RawReading};

use std::fmt::Debug;

use crate::data::Reading;

/// Trait for producing batches of readings.
///
/// Batches are returned ascending by timestamp. Consumers still sort
/// explicitly before picking the latest reading.
///
/// # Example
///
/// ```
/// use aquawatch::{RandomSource, ReadingSource};
///
/// let mut source = RandomSource::seeded(50, 42);
/// if let Some(readings) = source.poll() {
///     assert_eq!(readings.len(), 50);
/// }
/// ```
pub trait ReadingSource: Send + Debug {
    /// Poll for a new batch of readings.
    ///
    /// Returns `Some(readings)` if a new batch is available, `None`
    /// otherwise. This method should be non-blocking.
    fn poll(&mut self) -> Option<Vec<Reading>>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;

    /// Returns the error message from the last poll, if it failed.
    fn error(&self) -> Option<&str>;
}
