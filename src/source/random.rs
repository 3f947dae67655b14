//! Random reading generator.
//!
//! Stands in for a real sensor: every poll produces a fresh batch of
//! uniformly distributed integer readings spaced at a fixed interval and
//! ending at the current time.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use super::ReadingSource;
use crate::data::Reading;

/// Default number of readings per batch.
pub const DEFAULT_COUNT: usize = 50;
/// Default spacing between readings.
pub const DEFAULT_INTERVAL_MINUTES: i64 = 5;
/// Default lowest generated value.
pub const DEFAULT_MIN_VALUE: u32 = 50;
/// Default highest generated value.
pub const DEFAULT_MAX_VALUE: u32 = 600;

/// A source that generates random readings on every poll.
#[derive(Debug)]
pub struct RandomSource {
    count: usize,
    interval: Duration,
    min_value: u32,
    max_value: u32,
    rng: StdRng,
    description: String,
}

impl RandomSource {
    /// Create a generator seeded from system entropy.
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, StdRng::from_entropy(), "random".to_string())
    }

    /// Create a deterministic generator.
    pub fn seeded(count: usize, seed: u64) -> Self {
        Self::with_rng(count, StdRng::seed_from_u64(seed), format!("random (seed {})", seed))
    }

    fn with_rng(count: usize, rng: StdRng, description: String) -> Self {
        Self {
            count,
            interval: Duration::minutes(DEFAULT_INTERVAL_MINUTES),
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            rng,
            description,
        }
    }

    /// Set the spacing between consecutive readings.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the inclusive value range. Bounds are swapped if given backwards.
    pub fn with_value_range(mut self, min_value: u32, max_value: u32) -> Self {
        self.min_value = min_value.min(max_value);
        self.max_value = min_value.max(max_value);
        self
    }

    /// Generate a batch ending at `now`, ascending by timestamp.
    ///
    /// Readings whose timestamp would fall outside the representable range
    /// are skipped.
    pub fn generate_at(&mut self, now: DateTime<Utc>) -> Vec<Reading> {
        let mut readings: Vec<Reading> = (0..self.count)
            .filter_map(|i| {
                let value = self.rng.gen_range(self.min_value..=self.max_value);
                let offset = i32::try_from(i).ok().and_then(|i| self.interval.checked_mul(i))?;
                let timestamp = now.checked_sub_signed(offset)?;
                Some(Reading::new(timestamp, f64::from(value)))
            })
            .collect();

        if readings.len() < self.count {
            warn!(
                requested = self.count,
                generated = readings.len(),
                "skipped readings outside the timestamp range"
            );
        }

        readings.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        debug!(count = readings.len(), "generated random readings");
        readings
    }
}

impl ReadingSource for RandomSource {
    fn poll(&mut self) -> Option<Vec<Reading>> {
        Some(self.generate_at(Utc::now()))
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_714_557_600, 0).unwrap()
    }

    #[test]
    fn generates_requested_count_in_range() {
        let mut source = RandomSource::seeded(50, 1);
        let readings = source.generate_at(now());

        assert_eq!(readings.len(), 50);
        assert!(readings.iter().all(|r| (50.0..=600.0).contains(&r.value)));
        assert!(readings.iter().all(|r| r.value.fract() == 0.0));
    }

    #[test]
    fn readings_are_ascending_and_end_now() {
        let mut source = RandomSource::seeded(10, 1);
        let readings = source.generate_at(now());

        assert!(readings.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert_eq!(readings.last().unwrap().timestamp, now());
        assert_eq!(readings[0].timestamp, now() - Duration::minutes(45));
    }

    #[test]
    fn same_seed_same_values() {
        let a = RandomSource::seeded(20, 99).generate_at(now());
        let b = RandomSource::seeded(20, 99).generate_at(now());
        assert_eq!(a, b);
    }

    #[test]
    fn successive_polls_produce_fresh_batches() {
        let mut source = RandomSource::seeded(20, 5);
        let first = source.generate_at(now());
        let second = source.generate_at(now());
        assert_ne!(first, second);
    }

    #[test]
    fn custom_range_and_interval() {
        let mut source = RandomSource::seeded(5, 3)
            .with_value_range(10, 0)
            .with_interval(Duration::minutes(1));
        let readings = source.generate_at(now());

        assert!(readings.iter().all(|r| (0.0..=10.0).contains(&r.value)));
        assert_eq!(readings[0].timestamp, now() - Duration::minutes(4));
    }

    #[test]
    fn zero_count_is_an_empty_batch() {
        let mut source = RandomSource::seeded(0, 3);
        assert_eq!(source.poll(), Some(Vec::new()));
        assert!(source.error().is_none());
        assert_eq!(source.description(), "random (seed 3)");
    }

    #[test]
    fn out_of_range_timestamps_are_skipped() {
        // 100,000 years apart: only the first three fit in chrono's range
        let mut source = RandomSource::seeded(10, 3).with_interval(Duration::days(36_500_000));
        let readings = source.generate_at(now());

        assert_eq!(readings.len(), 3);
        assert_eq!(readings.last().unwrap().timestamp, now());
    }
}
