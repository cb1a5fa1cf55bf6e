// In memory implementation of the dataset store.
//
// Responsibilities
// - Keep events per dataset in insertion order.
// - Serve both the write port and the query port so every route sees one store.
// - Hold a dataset key only once an event has been appended for it.

use crate::modules::events::core::event::StoredEvent;
use crate::modules::events::use_cases::list_events::queries_port::EventQueries;
use crate::shared::infrastructure::dataset_store::DatasetStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDatasetStore {
    datasets: RwLock<BTreeMap<String, Vec<StoredEvent>>>,
}

impl InMemoryDatasetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DatasetStore for InMemoryDatasetStore {
    async fn append(&self, dataset: &str, event: StoredEvent) -> usize {
        let mut guard = self.datasets.write().await;
        let events = guard.entry(dataset.to_string()).or_default();
        events.push(event);
        events.len() - 1
    }
}

#[async_trait]
impl EventQueries for InMemoryDatasetStore {
    async fn all_datasets(&self) -> BTreeMap<String, Vec<StoredEvent>> {
        self.datasets.read().await.clone()
    }

    async fn dataset_events(&self, dataset: &str) -> Option<Vec<StoredEvent>> {
        self.datasets.read().await.get(dataset).cloned()
    }
}
