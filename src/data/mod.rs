//! Data models and processing for water quality readings.
//!
//! This module turns raw readings into classified, summarized data suitable
//! for display. Nothing here touches the terminal.
//!
//! ## Submodules
//!
//! - [`reading`]: [`Reading`] plus timestamp parsing and formatting
//! - [`status`]: [`Status`] and its user-facing [`DisplayStatus`]
//! - [`thresholds`]: [`ThresholdConfig`] and the [`classify`] rule
//! - [`summary`]: Sorting, classification and aggregation into a [`Summary`]
//! - [`dashboard`]: [`DashboardData`], the complete view handed to the UI
//!
//! ## Data Flow
//!
//! ```text
//! Vec<Reading> (from a ReadingSource)
//!        │
//!        ▼
//! classify_readings() ── ThresholdConfig
//!        │
//!        ├──▶ Vec<ClassifiedReading> (ascending by timestamp)
//!        │
//!        └──▶ summarize() ──▶ Summary
//! ```

pub mod dashboard;
pub mod reading;
pub mod status;
pub mod summary;
pub mod thresholds;

pub use dashboard::DashboardData;
pub use reading::{format_timestamp, format_value, Reading};
pub use status::{DisplayStatus, Status};
pub use summary::{
    classify_readings, latest_reading, summarize, ClassifiedReading, StatusCounts, Summary,
};
pub use thresholds::{classify, ThresholdConfig, ThresholdKind, THRESHOLD_MAX, THRESHOLD_MIN};
