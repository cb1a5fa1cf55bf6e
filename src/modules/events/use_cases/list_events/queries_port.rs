use crate::modules::events::core::event::StoredEvent;
use async_trait::async_trait;
use std::collections::BTreeMap;

#[async_trait]
pub trait EventQueries {
    /// Every dataset with its events, in insertion order.
    async fn all_datasets(&self) -> BTreeMap<String, Vec<StoredEvent>>;

    /// `None` when nothing has ever been ingested for `dataset`.
    async fn dataset_events(&self, dataset: &str) -> Option<Vec<StoredEvent>>;
}
