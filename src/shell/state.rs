use crate::modules::events::use_cases::ingest_event::handler::IngestEventHandler;
use crate::modules::events::use_cases::list_events::queries_port::EventQueries;
use crate::shared::infrastructure::dataset_store::in_memory::InMemoryDatasetStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemoryDatasetStore>,
    pub queries: Arc<dyn EventQueries + Send + Sync>,
    pub ingest_handler: Arc<IngestEventHandler<InMemoryDatasetStore>>,
}

impl AppState {
    /// Builds a state around a fresh, empty store. Ingestion and the
    /// inspection routes share that single store.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryDatasetStore::new());
        Self {
            queries: store.clone(),
            ingest_handler: Arc::new(IngestEventHandler::new(store.clone())),
            store,
        }
    }
}
