//! Error types for reading classification and aggregation.

use thiserror::Error;

/// Errors produced while turning readings into a dashboard view.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    /// There were no readings to summarize.
    #[error("no readings to summarize")]
    EmptyInput,

    /// A reading had a missing or non-numeric timestamp or value.
    #[error("invalid reading at index {index}: {reason}")]
    InvalidReading { index: usize, reason: String },
}

impl DashboardError {
    pub(crate) fn invalid(index: usize, reason: impl Into<String>) -> Self {
        DashboardError::InvalidReading {
            index,
            reason: reason.into(),
        }
    }
}
