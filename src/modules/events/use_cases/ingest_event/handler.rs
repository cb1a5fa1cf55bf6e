use crate::modules::events::use_cases::ingest_event::command::IngestEvent;
use crate::modules::events::use_cases::ingest_event::decide::decide_ingest;
use crate::modules::events::use_cases::ingest_event::decision::Decision;
use crate::shared::errors::ApplicationError;
use crate::shared::infrastructure::dataset_store::DatasetStore;
use std::sync::Arc;

pub struct IngestEventHandler<TStore>
where
    TStore: DatasetStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> IngestEventHandler<TStore>
where
    TStore: DatasetStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: IngestEvent) -> Result<(), ApplicationError> {
        match decide_ingest(command) {
            Decision::Accepted { dataset, event } => {
                tracing::info!(dataset = %dataset, body = %event.data, "Received event");
                let position = self.store.append(&dataset, event).await;
                tracing::debug!(dataset = %dataset, position, "Stored event");
                Ok(())
            }
            Decision::Rejected { reason } => {
                tracing::debug!(%reason, "Rejected event submission");
                Err(ApplicationError::BadRequest(reason.to_string()))
            }
        }
    }
}
