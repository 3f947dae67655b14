//! Wire format for readings loaded from JSON.
//!
//! Fields are kept as raw JSON values so that missing or non-numeric
//! entries can be reported as [`DashboardError::InvalidReading`] with the
//! offending index rather than as an opaque parse failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use chrono::DateTime;

use crate::data::reading::parse_timestamp;
use crate::data::Reading;
use crate::error::DashboardError;

/// One reading as it appears in a replay file.
///
/// ```json
/// { "timestamp": "2024-05-01T10:00:00Z", "value": 120 }
/// ```
///
/// `timestamp` may be an RFC 3339 string, a `YYYY-MM-DD HH:MM:SS` local
/// time string, or integer Unix seconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawReading {
    #[serde(default)]
    pub timestamp: Option<Value>,
    #[serde(default)]
    pub value: Option<Value>,
}

impl RawReading {
    /// Validate into a [`Reading`]. `index` is used for error reporting.
    pub fn into_reading(self, index: usize) -> Result<Reading, DashboardError> {
        let timestamp = match self.timestamp {
            None | Some(Value::Null) => {
                return Err(DashboardError::invalid(index, "missing timestamp"))
            }
            Some(Value::String(s)) => parse_timestamp(&s).ok_or_else(|| {
                DashboardError::invalid(index, format!("unrecognised timestamp {:?}", s))
            })?,
            Some(Value::Number(n)) => n
                .as_i64()
                .and_then(|secs| DateTime::from_timestamp(secs, 0))
                .ok_or_else(|| {
                    DashboardError::invalid(index, format!("timestamp {} out of range", n))
                })?,
            Some(other) => {
                return Err(DashboardError::invalid(
                    index,
                    format!("timestamp must be a string or number, got {}", other),
                ))
            }
        };

        let value = match self.value {
            None | Some(Value::Null) => return Err(DashboardError::invalid(index, "missing value")),
            Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()).ok_or_else(|| {
                DashboardError::invalid(index, format!("value {} is not a finite number", n))
            })?,
            Some(other) => {
                return Err(DashboardError::invalid(
                    index,
                    format!("value must be numeric, got {}", other),
                ))
            }
        };

        Ok(Reading::new(timestamp, value))
    }
}

/// Parse a JSON array of raw readings and validate every entry.
///
/// Fails on the first invalid reading. An empty array is returned as an
/// empty batch; emptiness is reported later when the batch is summarized.
pub fn parse_records(content: &str) -> anyhow::Result<Vec<Reading>> {
    let raw: Vec<RawReading> = serde_json::from_str(content)?;
    let readings = raw
        .into_iter()
        .enumerate()
        .map(|(index, r)| r.into_reading(index))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(readings)
}
