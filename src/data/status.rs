//! Water quality status labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a reading against the configured thresholds.
///
/// Ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    Good,
    Moderate,
    Contaminated,
}

impl Status {
    /// All statuses, best first.
    pub const ALL: [Status; 3] = [Status::Good, Status::Moderate, Status::Contaminated];

    /// Returns the status name.
    pub fn name(&self) -> &'static str {
        match self {
            Status::Good => "Good",
            Status::Moderate => "Moderate",
            Status::Contaminated => "Contaminated",
        }
    }

    /// Returns the user-facing label for this status.
    pub fn display(&self) -> DisplayStatus {
        match self {
            Status::Good => DisplayStatus::Good,
            Status::Moderate => DisplayStatus::Moderate,
            Status::Contaminated => DisplayStatus::Unsafe,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// User-facing relabeling of [`Status`] shown in the status panel.
///
/// `Contaminated` readings are presented as `Unsafe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayStatus {
    Good,
    Moderate,
    Unsafe,
}

impl DisplayStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DisplayStatus::Good => "Good",
            DisplayStatus::Moderate => "Moderate",
            DisplayStatus::Unsafe => "Unsafe",
        }
    }
}

impl From<Status> for DisplayStatus {
    fn from(status: Status) -> Self {
        status.display()
    }
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_matches_name_except_contaminated() {
        for status in Status::ALL {
            let display = status.display();
            if status == Status::Contaminated {
                assert_eq!(display.label(), "Unsafe");
            } else {
                assert_eq!(display.label(), status.name());
            }
        }
    }

    #[test]
    fn statuses_order_best_to_worst() {
        assert!(Status::Good < Status::Moderate);
        assert!(Status::Moderate < Status::Contaminated);
    }

    #[test]
    fn status_serializes_as_name() {
        let json = serde_json::to_string(&Status::Contaminated).unwrap();
        assert_eq!(json, "\"Contaminated\"");
        let json = serde_json::to_string(&DisplayStatus::Unsafe).unwrap();
        assert_eq!(json, "\"Unsafe\"");
    }
}
