// ============================================================================
// IDENTITY STATE - Current authenticated principal (persisted)
// ============================================================================

use crate::models::UserRecord;
use crate::state::ReactiveState;
use crate::utils::constants::STORAGE_KEY_USER;
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage, SharedStorage};

/// Owns the identity record. Consumers only read projections.
///
/// The record is rehydrated from storage synchronously at construction, so
/// the first render can show the cached user; a later liveness probe is
/// what confirms or clears it.
#[derive(Clone)]
pub struct IdentityState {
    user: ReactiveState<Option<UserRecord>>,
    storage: SharedStorage,
}

impl IdentityState {
    pub fn new(storage: SharedStorage) -> Self {
        let cached = match load_from_storage::<UserRecord>(storage.as_ref(), STORAGE_KEY_USER) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("⚠️ Could not restore user from storage, starting signed out: {}", e);
                None
            }
        };

        if let Some(ref user) = cached {
            log::info!("💾 User restored from storage: {}", user.display_name());
        }

        Self {
            user: ReactiveState::new(cached),
            storage,
        }
    }

    /// Replace the whole record.
    pub fn set_user(&self, record: UserRecord) {
        self.user.set(Some(record));
        self.persist();
    }

    pub fn clear_user(&self) {
        self.user.set(None);
        self.persist();
    }

    pub fn user(&self) -> Option<UserRecord> {
        self.user.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    pub fn display_name(&self) -> String {
        self.user.with(|user| match user {
            Some(user) => user.display_name(),
            None => "Unknown".to_string(),
        })
    }

    pub fn role_name(&self) -> String {
        self.user
            .with(|user| user.as_ref().map(UserRecord::role_name).unwrap_or_default())
    }

    pub fn image_url(&self) -> Option<String> {
        self.user.with(|user| {
            user.as_ref()
                .and_then(|u| u.image_url.clone())
                .filter(|url| !url.is_empty())
        })
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.user.subscribe(callback);
    }

    // Storage failures only cost durability, the in-memory record stays.
    fn persist(&self) {
        let result = self.user.with(|user| match user {
            Some(user) => save_to_storage(self.storage.as_ref(), STORAGE_KEY_USER, user),
            None => remove_from_storage(self.storage.as_ref(), STORAGE_KEY_USER),
        });
        if let Err(e) = result {
            log::warn!("⚠️ User not persisted, keeping it in memory only: {}", e);
        }
    }
}
