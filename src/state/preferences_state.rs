// ============================================================================
// PREFERENCES STATE - Language, side panel and busy indicator
// ============================================================================
// Language and side panel are persisted and rehydrated at startup.
// The busy indicator is transient.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::state::ReactiveState;
use crate::utils::constants::{DEFAULT_LOADING_TEXT, STORAGE_KEY_LANG, STORAGE_KEY_SIDEBAR};
use crate::utils::i18n::Locale;
use crate::utils::storage::{load_from_storage, save_to_storage, SharedStorage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingIndicator {
    pub visible: bool,
    pub text: String,
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self {
            visible: false,
            text: DEFAULT_LOADING_TEXT.to_string(),
        }
    }
}

// Persisted shapes
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LangPrefs {
    current_lang: String,
}

#[derive(Serialize, Deserialize)]
struct SidebarPrefs {
    visible: bool,
}

#[derive(Clone)]
pub struct PreferencesState {
    locale: ReactiveState<Locale>,
    sidebar_visible: ReactiveState<bool>,
    loading: ReactiveState<LoadingIndicator>,
    storage: SharedStorage,
}

impl PreferencesState {
    pub fn new(storage: SharedStorage) -> Self {
        let locale = match load_from_storage::<LangPrefs>(storage.as_ref(), STORAGE_KEY_LANG) {
            Ok(Some(prefs)) => Locale::from_code(&prefs.current_lang),
            Ok(None) => Locale::default(),
            Err(e) => {
                log::warn!("⚠️ Language preference unreadable, using default: {}", e);
                Locale::default()
            }
        };

        let sidebar_visible = match load_from_storage::<SidebarPrefs>(storage.as_ref(), STORAGE_KEY_SIDEBAR) {
            Ok(prefs) => prefs.map(|p| p.visible).unwrap_or(false),
            Err(e) => {
                log::warn!("⚠️ Sidebar preference unreadable, using default: {}", e);
                false
            }
        };

        log::info!("🌐 Language: {}", locale.as_str());

        Self {
            locale: ReactiveState::new(locale),
            sidebar_visible: ReactiveState::new(sidebar_visible),
            loading: ReactiveState::default(),
            storage,
        }
    }

    // ---- Language ----

    pub fn current_locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn switch_locale(&self, locale: Locale) {
        self.locale.set(locale);
        let prefs = LangPrefs {
            current_lang: locale.as_str().to_string(),
        };
        if let Err(e) = save_to_storage(self.storage.as_ref(), STORAGE_KEY_LANG, &prefs) {
            log::warn!("⚠️ Language not persisted: {}", e);
        }
    }

    pub fn current_flag(&self) -> &'static str {
        self.current_locale().flag_asset()
    }

    pub fn subscribe_locale<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.locale.subscribe(callback);
    }

    // ---- Side panel ----

    pub fn is_sidebar_visible(&self) -> bool {
        self.sidebar_visible.get()
    }

    pub fn toggle_sidebar(&self) {
        self.set_sidebar(!self.is_sidebar_visible());
    }

    pub fn open_sidebar(&self) {
        self.set_sidebar(true);
    }

    pub fn close_sidebar(&self) {
        self.set_sidebar(false);
    }

    fn set_sidebar(&self, visible: bool) {
        self.sidebar_visible.set(visible);
        if let Err(e) = save_to_storage(self.storage.as_ref(), STORAGE_KEY_SIDEBAR, &SidebarPrefs { visible }) {
            log::warn!("⚠️ Sidebar state not persisted: {}", e);
        }
    }

    // ---- Busy indicator ----

    /// Show the busy overlay. Without a message the previous text is kept.
    pub fn show_loading(&self, message: Option<&str>) {
        self.loading.update(|loading| {
            if let Some(text) = message {
                loading.text = text.to_string();
            }
            loading.visible = true;
        });
    }

    pub fn hide_loading(&self) {
        self.loading.update(|loading| loading.visible = false);
    }

    pub fn loading(&self) -> LoadingIndicator {
        self.loading.get()
    }

    pub fn subscribe_loading<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.loading.subscribe(callback);
    }
}
