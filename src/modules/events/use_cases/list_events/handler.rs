// Read side of the fixture: lookups against the query port that turn
// absences into NotFound errors carrying the caller-facing message.

use crate::modules::events::core::event::StoredEvent;
use crate::modules::events::use_cases::list_events::index::parse_index;
use crate::modules::events::use_cases::list_events::queries_port::EventQueries;
use crate::shared::errors::ApplicationError;

pub async fn list_dataset<Q>(queries: &Q, dataset: &str) -> Result<Vec<StoredEvent>, ApplicationError>
where
    Q: EventQueries + Send + Sync + ?Sized,
{
    queries
        .dataset_events(dataset)
        .await
        .ok_or_else(|| ApplicationError::NotFound(format!("no events for dataset '{dataset}'")))
}

/// The unknown-dataset check runs before the index is looked at, so a bad
/// index against a missing dataset still reports the dataset.
pub async fn get_event<Q>(
    queries: &Q,
    dataset: &str,
    raw_index: &str,
) -> Result<StoredEvent, ApplicationError>
where
    Q: EventQueries + Send + Sync + ?Sized,
{
    let events = list_dataset(queries, dataset).await?;

    parse_index(raw_index)
        .and_then(|index| events.into_iter().nth(index))
        .ok_or_else(|| {
            ApplicationError::NotFound(format!("no event {raw_index} for dataset '{dataset}'"))
        })
}
