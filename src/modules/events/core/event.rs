use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One ingested record: the event time and the payload exactly as it was sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEvent {
    pub time: String,
    pub data: Value,
}

/// Formats `instant` the way the ingestion API stamps events that carry no
/// explicit time: ISO-8601, UTC, millisecond precision, `Z` suffix.
pub fn format_event_time(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
