use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
};
use chrono::Utc;

use crate::modules::events::use_cases::ingest_event::command::IngestEvent;
use crate::shared::errors::ApplicationError;
use crate::shell::state::AppState;

pub const TEAM_HEADER: &str = "x-honeycomb-team";
pub const EVENT_TIME_HEADER: &str = "x-honeycomb-event-time";

// Body stays raw bytes here; Content-Type and JSON checks belong to the decider.
pub async fn handle(
    State(state): State<AppState>,
    Path(dataset): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApplicationError> {
    let command = IngestEvent {
        dataset,
        content_type: headers
            .get(CONTENT_TYPE)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned()),
        team_header_present: headers.contains_key(TEAM_HEADER),
        event_time: headers
            .get(EVENT_TIME_HEADER)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned()),
        body: body.to_vec(),
        received_at: Utc::now(),
    };

    state.ingest_handler.handle(command).await?;
    Ok(StatusCode::OK)
}
