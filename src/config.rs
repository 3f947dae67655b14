//! Runtime settings.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `AQUAWATCH_*` environment variables (sections separated by `__`, e.g.
//! `AQUAWATCH_THRESHOLDS__GOOD_MAX=150`). Command-line flags are applied on
//! top by the binary.

use std::path::Path;

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::data::{ThresholdConfig, THRESHOLD_MAX, THRESHOLD_MIN};
use crate::source::{DEFAULT_COUNT, DEFAULT_INTERVAL_MINUTES, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "AQUAWATCH";

/// Longest span a generated batch may cover, in minutes (about a century).
pub const MAX_SPAN_MINUTES: i64 = 100 * 366 * 24 * 60;

/// Threshold controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdSettings {
    pub good_max: f64,
    pub moderate_max: f64,
    /// Amount one key press moves a threshold.
    pub step: f64,
}

impl Default for ThresholdSettings {
    fn default() -> Self {
        let defaults = ThresholdConfig::default();
        Self {
            good_max: defaults.good_max,
            moderate_max: defaults.moderate_max,
            step: 10.0,
        }
    }
}

/// Random generator parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    pub readings: usize,
    pub interval_minutes: i64,
    pub min_value: u32,
    pub max_value: u32,
    pub seed: Option<u64>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            readings: DEFAULT_COUNT,
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            seed: None,
        }
    }
}

/// All runtime settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub thresholds: ThresholdSettings,
    pub source: SourceSettings,
    /// Seconds between automatic regenerations. Zero means only on demand.
    pub refresh_secs: u64,
}

impl Settings {
    /// Load settings from defaults, an optional file, and the environment.
    ///
    /// The result is not validated; callers apply their own overrides first
    /// and then call [`Settings::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to load settings")?
            .try_deserialize()
            .context("invalid settings")?;

        Ok(settings)
    }

    /// Threshold configuration described by these settings.
    pub fn threshold_config(&self) -> ThresholdConfig {
        ThresholdConfig::new(self.thresholds.good_max, self.thresholds.moderate_max)
    }

    /// Reject settings the dashboard cannot work with.
    ///
    /// Inverted thresholds are allowed and only logged.
    pub fn validate(&self) -> Result<()> {
        let thresholds = self.threshold_config();
        if !thresholds.in_range() {
            bail!(
                "thresholds must be between {} and {} (got good_max={}, moderate_max={})",
                THRESHOLD_MIN,
                THRESHOLD_MAX,
                thresholds.good_max,
                thresholds.moderate_max
            );
        }
        if !(self.thresholds.step.is_finite() && self.thresholds.step > 0.0) {
            bail!("threshold step must be positive (got {})", self.thresholds.step);
        }
        if self.source.min_value > self.source.max_value {
            bail!(
                "source min_value {} exceeds max_value {}",
                self.source.min_value,
                self.source.max_value
            );
        }
        if self.source.interval_minutes <= 0 {
            bail!(
                "source interval_minutes must be positive (got {})",
                self.source.interval_minutes
            );
        }
        let span = i64::try_from(self.source.readings.max(1))
            .unwrap_or(i64::MAX)
            .saturating_mul(self.source.interval_minutes);
        if span > MAX_SPAN_MINUTES {
            bail!(
                "{} readings every {} minutes spans more than {} minutes",
                self.source.readings,
                self.source.interval_minutes,
                MAX_SPAN_MINUTES
            );
        }
        if thresholds.is_inverted() {
            warn!(
                good_max = thresholds.good_max,
                moderate_max = thresholds.moderate_max,
                "good threshold is above moderate threshold; no reading will classify as Moderate"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::Builder;

    // Loading reads the process environment, which tests share
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn defaults_match_dashboard_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.thresholds.good_max, 200.0);
        assert_eq!(settings.thresholds.moderate_max, 400.0);
        assert_eq!(settings.source.readings, 50);
        assert_eq!(settings.source.interval_minutes, 5);
        assert_eq!(settings.source.min_value, 50);
        assert_eq!(settings.source.max_value, 600);
        assert_eq!(settings.refresh_secs, 0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn load_from_toml_file() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
refresh_secs = 30

[thresholds]
good_max = 150.0

[source]
readings = 10
seed = 42
"#
        )
        .unwrap();

        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.thresholds.good_max, 150.0);
        assert_eq!(settings.thresholds.moderate_max, 400.0);
        assert_eq!(settings.source.readings, 10);
        assert_eq!(settings.source.seed, Some(42));
        assert_eq!(settings.refresh_secs, 30);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = Settings::load(Some(Path::new("/nonexistent/aquawatch.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_thresholds_rejected() {
        let mut settings = Settings::default();
        settings.thresholds.moderate_max = 700.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn inverted_thresholds_permitted() {
        let mut settings = Settings::default();
        settings.thresholds.good_max = 500.0;
        assert!(settings.validate().is_ok());
        assert!(settings.threshold_config().is_inverted());
    }

    #[test]
    fn backwards_value_range_rejected() {
        let mut settings = Settings::default();
        settings.source.min_value = 700;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn non_positive_step_rejected() {
        let mut settings = Settings::default();
        settings.thresholds.step = 0.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn load_leaves_validation_to_caller() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[thresholds]\ngood_max = 700.0").unwrap();

        let mut settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.thresholds.good_max, 700.0);
        assert!(settings.validate().is_err());

        // A command-line override can still bring it back into range
        settings.thresholds.good_max = 100.0;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn environment_overrides_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("AQUAWATCH_THRESHOLDS__GOOD_MAX", "150");
        std::env::set_var("AQUAWATCH_REFRESH_SECS", "5");

        let result = Settings::load(None);

        std::env::remove_var("AQUAWATCH_THRESHOLDS__GOOD_MAX");
        std::env::remove_var("AQUAWATCH_REFRESH_SECS");

        let settings = result.unwrap();
        assert_eq!(settings.thresholds.good_max, 150.0);
        assert_eq!(settings.thresholds.moderate_max, 400.0);
        assert_eq!(settings.refresh_secs, 5);
    }

    #[test]
    fn oversized_interval_rejected() {
        let mut settings = Settings::default();
        settings.source.interval_minutes = 10_000_000_000;
        assert!(settings.validate().is_err());

        // 50 readings a day apart is fine
        settings.source.interval_minutes = 24 * 60;
        assert!(settings.validate().is_ok());

        settings.source.readings = usize::MAX;
        assert!(settings.validate().is_err());
    }
}
