use crate::error::AppResult;
use crate::models::MapEntry;
use crate::services::api_client::ApiClient;
use crate::services::collection_sync::CollectionSync;
use crate::state::MapList;
use crate::utils::constants::MAPS_PATH;

/// Map entries synchronizer (`GET /getMaps`).
#[derive(Clone)]
pub struct MapService {
    sync: CollectionSync<MapEntry>,
}

impl MapService {
    pub fn new(api: ApiClient, entries: MapList) -> Self {
        Self {
            sync: CollectionSync::new(api, MAPS_PATH, entries),
        }
    }

    pub async fn fetch_maps(&self) -> AppResult<usize> {
        self.sync.fetch().await
    }

    pub fn entries(&self) -> &MapList {
        self.sync.container()
    }

    /// Entries the map can actually place, with parsed coordinates.
    pub fn markers(&self) -> Vec<(MapEntry, (f64, f64))> {
        self.entries().with_items(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.coordinates().map(|coords| (entry.clone(), coords)))
                .collect()
        })
    }
}
