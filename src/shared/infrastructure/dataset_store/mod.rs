use crate::modules::events::core::event::StoredEvent;
use async_trait::async_trait;

/// Write side of the dataset store.
///
/// Datasets are append-only: a dataset comes into existence with its first
/// event and events keep their insertion order for the life of the store.
#[async_trait]
pub trait DatasetStore: Send + Sync {
    /// Appends `event` to `dataset`, creating the dataset if needed, and
    /// returns the zero-based position the event landed at.
    async fn append(&self, dataset: &str, event: StoredEvent) -> usize;
}

pub mod in_memory;
