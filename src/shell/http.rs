use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::events::use_cases::ingest_event::inbound::http as ingest_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::shell::state::AppState;

pub const PING_MESSAGE: &str = "Honeycomb fake is running";

pub async fn ping() -> &'static str {
    PING_MESSAGE
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/1/events/{dataset}", post(ingest_http::handle))
        .route("/fake/events", get(list_http::list_all))
        .route("/fake/events/{dataset}", get(list_http::list_for_dataset))
        .route("/fake/events/{dataset}/{index}", get(list_http::get_one))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
