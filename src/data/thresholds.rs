//! Threshold configuration and reading classification.

use serde::{Deserialize, Serialize};

use super::status::Status;

/// Lowest value either threshold may be set to.
pub const THRESHOLD_MIN: f64 = 0.0;
/// Highest value either threshold may be set to.
pub const THRESHOLD_MAX: f64 = 600.0;

/// Cutoffs separating the Good, Moderate and Contaminated bands.
///
/// `good_max <= moderate_max` should hold but is not enforced. When the
/// bounds are inverted, classification still follows the rule chain in
/// [`ThresholdConfig::classify`]; use [`ThresholdConfig::is_inverted`] to
/// surface the misconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Readings strictly below this are Good.
    pub good_max: f64,
    /// Readings strictly below this (and not Good) are Moderate.
    pub moderate_max: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            good_max: 200.0,
            moderate_max: 400.0,
        }
    }
}

/// Which of the two thresholds an adjustment applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdKind {
    #[default]
    Good,
    Moderate,
}

impl ThresholdKind {
    pub fn toggle(self) -> Self {
        match self {
            ThresholdKind::Good => ThresholdKind::Moderate,
            ThresholdKind::Moderate => ThresholdKind::Good,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThresholdKind::Good => "Good max microplastics",
            ThresholdKind::Moderate => "Moderate max microplastics",
        }
    }
}

impl ThresholdConfig {
    pub fn new(good_max: f64, moderate_max: f64) -> Self {
        Self {
            good_max,
            moderate_max,
        }
    }

    /// Classify a value against these thresholds.
    ///
    /// Each band's upper bound is exclusive, so a value equal to `good_max`
    /// is Moderate and a value equal to `moderate_max` is Contaminated.
    /// NaN compares false against both bounds and falls through to
    /// Contaminated.
    pub fn classify(&self, value: f64) -> Status {
        if value < self.good_max {
            Status::Good
        } else if value < self.moderate_max {
            Status::Moderate
        } else {
            Status::Contaminated
        }
    }

    /// True when `good_max > moderate_max`.
    ///
    /// Values in `[moderate_max, good_max)` then classify as Good and no
    /// value is ever Moderate.
    pub fn is_inverted(&self) -> bool {
        self.good_max > self.moderate_max
    }

    /// Returns the value of one threshold.
    pub fn get(&self, kind: ThresholdKind) -> f64 {
        match kind {
            ThresholdKind::Good => self.good_max,
            ThresholdKind::Moderate => self.moderate_max,
        }
    }

    /// Returns a copy with one threshold moved by `delta`, clamped to
    /// `[THRESHOLD_MIN, THRESHOLD_MAX]`.
    ///
    /// The other threshold is left alone, even if the result is inverted.
    pub fn adjusted(&self, kind: ThresholdKind, delta: f64) -> Self {
        let value = (self.get(kind) + delta).clamp(THRESHOLD_MIN, THRESHOLD_MAX);
        match kind {
            ThresholdKind::Good => Self {
                good_max: value,
                ..*self
            },
            ThresholdKind::Moderate => Self {
                moderate_max: value,
                ..*self
            },
        }
    }

    /// Check that both thresholds are finite and within the adjustable range.
    pub fn in_range(&self) -> bool {
        [self.good_max, self.moderate_max]
            .iter()
            .all(|v| v.is_finite() && (THRESHOLD_MIN..=THRESHOLD_MAX).contains(v))
    }
}

/// Classify a value against the given thresholds.
pub fn classify(value: f64, config: &ThresholdConfig) -> Status {
    config.classify(value)
}
