use axum::{
    Json,
    extract::{Path, State},
};
use std::collections::BTreeMap;

use crate::modules::events::core::event::StoredEvent;
use crate::modules::events::use_cases::list_events::handler::{get_event, list_dataset};
use crate::shared::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn list_all(State(state): State<AppState>) -> Json<BTreeMap<String, Vec<StoredEvent>>> {
    Json(state.queries.all_datasets().await)
}

pub async fn list_for_dataset(
    State(state): State<AppState>,
    Path(dataset): Path<String>,
) -> Result<Json<Vec<StoredEvent>>, ApplicationError> {
    list_dataset(state.queries.as_ref(), &dataset).await.map(Json)
}

pub async fn get_one(
    State(state): State<AppState>,
    Path((dataset, index)): Path<(String, String)>,
) -> Result<Json<StoredEvent>, ApplicationError> {
    get_event(state.queries.as_ref(), &dataset, &index)
        .await
        .map(Json)
}
