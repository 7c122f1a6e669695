//! Value types for a single generation call.
//!
//! # Design
//! `Range` can only be obtained through validation, so holding one proves the
//! bounds and ordering checks already ran. The record types are the shapes a
//! host receives per input item; they serialize with camelCase keys so the JSON
//! matches what workflow hosts already consume.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RandomError;

/// Label attached to every successful record.
pub const SOURCE_LABEL: &str = "Random.org";

/// A validated, inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    min: i64,
    max: i64,
}

impl Range {
    /// Build a range from integers, applying the ordering and bounds checks.
    pub fn new(min: i64, max: i64) -> Result<Self, RandomError> {
        crate::validate::check_order_and_bounds(min, max)?;
        Ok(Self { min, max })
    }

    pub(crate) fn new_unchecked(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }
}

/// Per-item success record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedNumber {
    pub random_number: i64,
    pub min: i64,
    pub max: i64,
    pub timestamp: String,
    pub source: String,
}

impl GeneratedNumber {
    pub fn new(random_number: i64, range: Range) -> Self {
        Self {
            random_number,
            min: range.min(),
            max: range.max(),
            timestamp: now_iso8601(),
            source: SOURCE_LABEL.to_string(),
        }
    }
}

/// Per-item failure record, produced when the host continues past errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailedItem {
    pub error: String,
    pub timestamp: String,
}

impl FailedItem {
    pub fn from_error(err: &RandomError) -> Self {
        Self {
            error: err.message().to_string(),
            timestamp: now_iso8601(),
        }
    }
}

/// Outcome of one item; serializes as the bare inner record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ItemOutcome {
    Generated(GeneratedNumber),
    Failed(FailedItem),
}

impl ItemOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, ItemOutcome::Failed(_))
    }
}

/// Current UTC time as ISO-8601 with millisecond precision, e.g.
/// `2026-10-16T09:01:00.000Z`.
fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_new_accepts_ordered_in_bounds() {
        let range = Range::new(-5, 5).unwrap();
        assert_eq!(range.min(), -5);
        assert_eq!(range.max(), 5);
    }

    #[test]
    fn range_new_rejects_reversed() {
        let err = Range::new(10, 1).unwrap_err();
        assert_eq!(err.to_string(), "Minimum value cannot be greater than maximum value");
    }

    #[test]
    fn range_new_rejects_out_of_bounds() {
        let err = Range::new(0, 1_000_000_001).unwrap_err();
        assert_eq!(err.to_string(), "Values must be between -1,000,000,000 and 1,000,000,000");
    }

    #[test]
    fn generated_number_serializes_camel_case() {
        let record = GeneratedNumber::new(42, Range::new(1, 100).unwrap());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["randomNumber"], 42);
        assert_eq!(json["min"], 1);
        assert_eq!(json["max"], 100);
        assert_eq!(json["source"], "Random.org");
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn timestamp_is_iso8601_millis() {
        let ts = now_iso8601();
        // 2026-10-16T09:01:00.000Z
        assert_eq!(ts.len(), 24);
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn failed_item_carries_message() {
        let err = RandomError::Parse("Invalid response from Random.org API".into());
        let record = FailedItem::from_error(&err);
        assert_eq!(record.error, "Invalid response from Random.org API");
    }

    #[test]
    fn item_outcome_serializes_untagged() {
        let outcome = ItemOutcome::Failed(FailedItem {
            error: "boom".into(),
            timestamp: "2026-10-16T09:01:00.000Z".into(),
        });
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json, serde_json::json!({"error": "boom", "timestamp": "2026-10-16T09:01:00.000Z"}));
        assert!(outcome.is_failed());
    }
}
