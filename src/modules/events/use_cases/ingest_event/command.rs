use chrono::{DateTime, Utc};

/// Everything the ingest route received, before any validation.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestEvent {
    pub dataset: String,
    pub content_type: Option<String>,
    pub team_header_present: bool,
    pub event_time: Option<String>,
    pub body: Vec<u8>,
    pub received_at: DateTime<Utc>,
}
