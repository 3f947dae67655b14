//! # aquawatch
//!
//! A terminal dashboard and library for microplastic water quality readings.
//!
//! Readings are classified against two adjustable thresholds into
//! Good, Moderate or Contaminated. The dashboard shows the latest status,
//! the distribution across statuses, and the reading levels over time.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(classify)│    │(render) │    │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── RandomSource | FileSource | FixtureSource   │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, threshold controls and view navigation
//! - **[`source`]**: The [`ReadingSource`] trait and its implementations
//! - **[`data`]**: Classification, aggregation and the [`DashboardData`] handed to the UI
//! - **[`ui`]**: Terminal rendering using ratatui
//! - **[`config`]**: Layered [`Settings`] from defaults, file and environment
//! - **[`report`]**: JSON export of the current dashboard
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Fifty random readings, five minutes apart
//! aquawatch
//!
//! # Replay readings from a JSON file with custom thresholds
//! aquawatch --file readings.json --good-max 150 --moderate-max 350
//!
//! # Export a summary without starting the TUI
//! aquawatch --seed 7 --export summary.json
//! ```
//!
//! ### Classifying readings
//!
//! ```
//! use aquawatch::{classify_readings, summarize, DisplayStatus, Reading, Status, ThresholdConfig};
//! use chrono::DateTime;
//!
//! let readings = vec![
//!     Reading::new(DateTime::from_timestamp(600, 0).unwrap(), 450.0),
//!     Reading::new(DateTime::from_timestamp(0, 0).unwrap(), 120.0),
//! ];
//!
//! let classified = classify_readings(&readings, &ThresholdConfig::default()).unwrap();
//! let summary = summarize(&classified).unwrap();
//!
//! assert_eq!(summary.latest_status, Status::Contaminated);
//! assert_eq!(summary.display_status, DisplayStatus::Unsafe);
//! assert_eq!(summary.counts_by_status.get(Status::Good), 1);
//! ```
//!
//! ### Running the app with a source
//!
//! ```no_run
//! use aquawatch::{App, RandomSource, ThresholdConfig};
//!
//! let source = Box::new(RandomSource::seeded(50, 42));
//! let mut app = App::new(source, ThresholdConfig::default());
//! app.reload_data().unwrap();
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod report;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, View};
pub use config::Settings;
pub use data::{
    classify, classify_readings, latest_reading, summarize, ClassifiedReading, DashboardData,
    DisplayStatus, Reading, Status, StatusCounts, Summary, ThresholdConfig, ThresholdKind,
};
pub use error::DashboardError;
pub use source::{FileSource, FixtureSource, RandomSource, RawReading, ReadingSource};
