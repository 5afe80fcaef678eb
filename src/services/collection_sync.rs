// ============================================================================
// COLLECTION SYNC - Fetch a list endpoint into a shared container
// ============================================================================

use serde::de::DeserializeOwned;

use crate::error::AppResult;
use crate::models::CollectionEnvelope;
use crate::services::api_client::ApiClient;
use crate::state::CollectionState;

/// One endpoint bound to one container.
///
/// Success replaces the container as a whole; any failure leaves it as it
/// was and goes back to the caller. Session errors were already handled by
/// the gateway by then, anything else is the caller's to surface.
pub struct CollectionSync<T> {
    api: ApiClient,
    path: &'static str,
    container: CollectionState<T>,
}

impl<T: DeserializeOwned> CollectionSync<T> {
    pub fn new(api: ApiClient, path: &'static str, container: CollectionState<T>) -> Self {
        Self { api, path, container }
    }

    /// Returns the number of items now in the container.
    pub async fn fetch(&self) -> AppResult<usize> {
        let envelope: CollectionEnvelope<T> = self.api.get_json(self.path).await.map_err(|e| {
            log::error!("❌ Failed to fetch {}: {}", self.path, e);
            e
        })?;

        let items = envelope.into_items().map_err(|e| {
            log::error!("❌ Unexpected response from {}: {}", self.path, e);
            e
        })?;

        let count = items.len();
        self.container.replace(items);
        log::info!("📦 {} synced: {} items (v{})", self.path, count, self.container.version());
        Ok(count)
    }

    pub fn container(&self) -> &CollectionState<T> {
        &self.container
    }
}

impl<T> Clone for CollectionSync<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            path: self.path,
            container: self.container.clone(),
        }
    }
}
