//! Classification of reading sequences and status aggregation.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use super::reading::Reading;
use super::status::{DisplayStatus, Status};
use super::thresholds::ThresholdConfig;
use crate::error::DashboardError;

/// A reading together with its status under a particular threshold config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassifiedReading {
    #[serde(flatten)]
    pub reading: Reading,
    pub status: Status,
}

/// Classify every reading and return them sorted ascending by timestamp.
///
/// Fails with [`DashboardError::InvalidReading`] if any value is NaN or
/// infinite. The sort is stable, so readings sharing a timestamp keep their
/// input order.
pub fn classify_readings(
    readings: &[Reading],
    config: &ThresholdConfig,
) -> Result<Vec<ClassifiedReading>, DashboardError> {
    let mut classified = readings
        .iter()
        .enumerate()
        .map(|(index, reading)| {
            if !reading.value.is_finite() {
                return Err(DashboardError::invalid(
                    index,
                    format!("value {} is not a finite number", reading.value),
                ));
            }
            Ok(ClassifiedReading {
                reading: *reading,
                status: config.classify(reading.value),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    classified.sort_by(|a, b| a.reading.timestamp.cmp(&b.reading.timestamp));
    Ok(classified)
}

/// Returns the most recent reading, or `None` for an empty slice.
///
/// Ties on timestamp resolve to the larger value so the result does not
/// depend on input order.
pub fn latest_reading(readings: &[ClassifiedReading]) -> Option<&ClassifiedReading> {
    readings.iter().max_by(|a, b| compare_recency(&a.reading, &b.reading))
}

fn compare_recency(a: &Reading, b: &Reading) -> Ordering {
    a.timestamp.cmp(&b.timestamp).then_with(|| a.value.total_cmp(&b.value))
}

/// Count of readings per status.
///
/// Only statuses that occur are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatusCounts(BTreeMap<Status, usize>);

impl StatusCounts {
    /// Count the statuses of a reading sequence.
    pub fn tally(readings: &[ClassifiedReading]) -> Self {
        let mut counts = BTreeMap::new();
        for reading in readings {
            *counts.entry(reading.status).or_insert(0) += 1;
        }
        Self(counts)
    }

    /// Number of readings with the given status.
    pub fn get(&self, status: Status) -> usize {
        self.0.get(&status).copied().unwrap_or(0)
    }

    /// Total number of readings counted.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Percentage of readings with the given status, in `[0, 100]`.
    pub fn percentage(&self, status: Status) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(status) as f64 * 100.0 / total as f64
    }

    /// Iterate over present statuses, best first.
    pub fn iter(&self) -> impl Iterator<Item = (Status, usize)> + '_ {
        self.0.iter().map(|(status, count)| (*status, *count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Aggregate view over a sequence of classified readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub latest_reading: Reading,
    pub latest_status: Status,
    pub display_status: DisplayStatus,
    pub counts_by_status: StatusCounts,
}

/// Summarize a sequence of classified readings.
///
/// Input order does not matter: the latest reading is found by timestamp.
pub fn summarize(readings: &[ClassifiedReading]) -> Result<Summary, DashboardError> {
    let latest = latest_reading(readings).ok_or(DashboardError::EmptyInput)?;

    Ok(Summary {
        latest_reading: latest.reading,
        latest_status: latest.status,
        display_status: latest.status.display(),
        counts_by_status: StatusCounts::tally(readings),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn make_readings(values: &[(i64, f64)]) -> Vec<Reading> {
        values.iter().map(|&(t, v)| Reading::new(at(t), v)).collect()
    }

    #[test]
    fn single_reading_summary() {
        let readings = make_readings(&[(0, 50.0)]);
        let classified = classify_readings(&readings, &ThresholdConfig::default()).unwrap();
        let summary = summarize(&classified).unwrap();

        assert_eq!(summary.latest_reading.value, 50.0);
        assert_eq!(summary.latest_status, Status::Good);
        assert_eq!(summary.display_status.label(), "Good");
        assert_eq!(summary.counts_by_status.get(Status::Good), 1);
        assert_eq!(summary.counts_by_status.len(), 1);
        assert_eq!(summary.counts_by_status.total(), 1);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(summarize(&[]), Err(DashboardError::EmptyInput));
    }

    #[test]
    fn classify_readings_sorts_ascending() {
        let readings = make_readings(&[(300, 500.0), (0, 50.0), (150, 250.0)]);
        let classified = classify_readings(&readings, &ThresholdConfig::default()).unwrap();

        let times: Vec<i64> = classified.iter().map(|c| c.reading.timestamp.timestamp()).collect();
        assert_eq!(times, vec![0, 150, 300]);
        assert_eq!(classified[0].status, Status::Good);
        assert_eq!(classified[1].status, Status::Moderate);
        assert_eq!(classified[2].status, Status::Contaminated);
    }

    #[test]
    fn classify_readings_rejects_non_finite_values() {
        let readings = make_readings(&[(0, 50.0), (60, f64::NAN)]);
        let err = classify_readings(&readings, &ThresholdConfig::default()).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidReading { index: 1, .. }));
    }

    #[test]
    fn latest_is_max_timestamp_not_last_element() {
        let readings = make_readings(&[(600, 450.0), (0, 50.0), (300, 250.0)]);
        let classified: Vec<ClassifiedReading> = readings
            .iter()
            .map(|r| ClassifiedReading {
                reading: *r,
                status: ThresholdConfig::default().classify(r.value),
            })
            .collect();

        let summary = summarize(&classified).unwrap();
        assert_eq!(summary.latest_reading.value, 450.0);
        assert_eq!(summary.latest_status, Status::Contaminated);
        assert_eq!(summary.display_status, DisplayStatus::Unsafe);
    }

    #[test]
    fn latest_tie_breaks_on_value() {
        let readings = make_readings(&[(60, 100.0), (60, 500.0), (0, 10.0)]);
        let classified = classify_readings(&readings, &ThresholdConfig::default()).unwrap();
        assert_eq!(latest_reading(&classified).unwrap().reading.value, 500.0);

        let mut reversed = classified.clone();
        reversed.reverse();
        assert_eq!(latest_reading(&reversed).unwrap().reading.value, 500.0);
    }

    #[test]
    fn summary_is_invariant_to_ordering() {
        let readings: Vec<Reading> =
            (0..40).map(|i| Reading::new(at(i * 300), ((i * 37) % 600) as f64)).collect();
        let config = ThresholdConfig::default();
        let baseline = summarize(&classify_readings(&readings, &config).unwrap()).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let mut shuffled = readings.clone();
            shuffled.shuffle(&mut rng);

            // Summarize without re-sorting as well as through the sorting path.
            let unsorted: Vec<ClassifiedReading> = shuffled
                .iter()
                .map(|r| ClassifiedReading {
                    reading: *r,
                    status: config.classify(r.value),
                })
                .collect();
            let direct = summarize(&unsorted).unwrap();
            let sorted = summarize(&classify_readings(&shuffled, &config).unwrap()).unwrap();

            assert_eq!(direct.latest_reading, baseline.latest_reading);
            assert_eq!(direct.counts_by_status, baseline.counts_by_status);
            assert_eq!(sorted, baseline);
        }
    }

    #[test]
    fn summarize_is_idempotent() {
        let readings = make_readings(&[(0, 50.0), (300, 250.0), (600, 450.0)]);
        let classified = classify_readings(&readings, &ThresholdConfig::default()).unwrap();
        assert_eq!(summarize(&classified), summarize(&classified));
    }

    #[test]
    fn counts_and_percentages() {
        let readings = make_readings(&[(0, 50.0), (1, 60.0), (2, 250.0), (3, 450.0)]);
        let classified = classify_readings(&readings, &ThresholdConfig::default()).unwrap();
        let counts = StatusCounts::tally(&classified);

        assert_eq!(counts.get(Status::Good), 2);
        assert_eq!(counts.get(Status::Moderate), 1);
        assert_eq!(counts.get(Status::Contaminated), 1);
        assert_eq!(counts.percentage(Status::Good), 50.0);
        assert_eq!(counts.percentage(Status::Contaminated), 25.0);

        let order: Vec<Status> = counts.iter().map(|(s, _)| s).collect();
        assert_eq!(order, Status::ALL.to_vec());
    }

    #[test]
    fn empty_counts() {
        let counts = StatusCounts::default();
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.percentage(Status::Good), 0.0);
    }

    #[test]
    fn reclassifying_with_new_thresholds_changes_counts() {
        let readings = make_readings(&[(0, 150.0), (1, 250.0), (2, 350.0)]);
        let default = classify_readings(&readings, &ThresholdConfig::default()).unwrap();
        let strict = classify_readings(&readings, &ThresholdConfig::new(100.0, 200.0)).unwrap();

        assert_eq!(StatusCounts::tally(&default).get(Status::Good), 1);
        assert_eq!(StatusCounts::tally(&strict).get(Status::Contaminated), 2);
    }
}
