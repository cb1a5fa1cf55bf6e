// Pure decision function for ingestion.
//
// Responsibilities
// - Check the Content-Type, then the body, then the team header. The first
//   failure wins.
// - Stamp the event with the caller's event time, or the receipt time.
// - Never touch the store.

use crate::modules::events::core::event::{StoredEvent, format_event_time};
use crate::modules::events::use_cases::ingest_event::command::IngestEvent;
use crate::modules::events::use_cases::ingest_event::decision::{DecideError, Decision};
use serde_json::Value;

pub const JSON_CONTENT_TYPE: &str = "application/json";

pub fn decide_ingest(command: IngestEvent) -> Decision {
    if command.content_type.as_deref() != Some(JSON_CONTENT_TYPE) {
        return Decision::Rejected {
            reason: DecideError::IncorrectContentType,
        };
    }

    let data = match parse_body(&command.body) {
        Ok(data) => data,
        Err(reason) => return Decision::Rejected { reason },
    };

    if !command.team_header_present {
        return Decision::Rejected {
            reason: DecideError::MissingTeamHeader,
        };
    }

    let time = command
        .event_time
        .unwrap_or_else(|| format_event_time(command.received_at));

    Decision::Accepted {
        dataset: command.dataset,
        event: StoredEvent { time, data },
    }
}

// An empty JSON request body reads as an empty object.
fn parse_body(body: &[u8]) -> Result<Value, DecideError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(body).map_err(|e| DecideError::MalformedBody(e.to_string()))
}
