//! JSON export of the current dashboard state.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::data::{ClassifiedReading, DashboardData, Status, Summary, ThresholdConfig};

/// Serializable snapshot of a dashboard.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub thresholds: &'a ThresholdConfig,
    pub thresholds_inverted: bool,
    pub summary: &'a Summary,
    /// Share of readings per status, in percent.
    pub distribution: Vec<DistributionEntry>,
    pub readings: &'a [ClassifiedReading],
}

#[derive(Debug, Serialize)]
pub struct DistributionEntry {
    pub status: Status,
    pub count: usize,
    pub percentage: f64,
}

impl<'a> Report<'a> {
    pub fn new(data: &'a DashboardData) -> Self {
        let counts = &data.summary.counts_by_status;
        let distribution = counts
            .iter()
            .map(|(status, count)| DistributionEntry {
                status,
                count,
                percentage: (counts.percentage(status) * 10.0).round() / 10.0,
            })
            .collect();

        Self {
            thresholds: &data.thresholds,
            thresholds_inverted: data.thresholds.is_inverted(),
            summary: &data.summary,
            distribution,
            readings: &data.readings,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write the dashboard as pretty-printed JSON.
pub fn write_report(data: &DashboardData, path: &Path) -> Result<()> {
    let json = Report::new(data).to_json()?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
