// ============================================================================
// APP - Composition root
// ============================================================================
// Every state holder is built exactly once here and handed to its consumers
// by (cheap, Rc-backed) clone. Nothing in the library lives in a global.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::router::{NavigationGuard, NavigationOutcome, Route, Router};
use crate::services::{AlertService, ApiClient, HttpTransport, MapService, OrderService, SessionService};
use crate::state::{CollectionState, IdentityState, PreferencesState};
use crate::utils::i18n::Catalog;
use crate::utils::storage::SharedStorage;

/// Main application
pub struct App {
    config: AppConfig,
    preferences: PreferencesState,
    identity: IdentityState,
    alerts: AlertService,
    router: Router,
    session: SessionService,
    api: ApiClient,
    guard: NavigationGuard,
    orders: OrderService,
    maps: MapService,
}

impl App {
    pub fn new(config: AppConfig, transport: Rc<dyn HttpTransport>, storage: SharedStorage) -> Self {
        Self::with_catalog(config, transport, storage, Catalog::builtin())
    }

    pub fn with_catalog(
        config: AppConfig,
        transport: Rc<dyn HttpTransport>,
        storage: SharedStorage,
        catalog: Catalog,
    ) -> Self {
        // Rehydration is synchronous so the first paint already has it
        let preferences = PreferencesState::new(storage.clone());
        let identity = IdentityState::new(storage);

        let alerts = AlertService::new(preferences.clone(), Rc::new(catalog));
        let router = Router::new();
        let session = SessionService::new(alerts.clone(), identity.clone(), router.clone());
        let api = ApiClient::new(&config, transport, session.clone());
        let guard = NavigationGuard::new(router.clone(), api.clone(), session.clone());

        let orders = OrderService::new(api.clone(), CollectionState::new());
        let maps = MapService::new(api.clone(), CollectionState::new());

        log::info!("🚀 App ready (backend: {})", config.backend_url());

        Self {
            config,
            preferences,
            identity,
            alerts,
            router,
            session,
            api,
            guard,
            orders,
            maps,
        }
    }

    /// Browser wiring: gloo-net transport, localStorage (memory fallback).
    #[cfg(target_arch = "wasm32")]
    pub fn in_browser() -> Self {
        use crate::services::GlooTransport;
        use crate::utils::storage::{BrowserStorage, MemoryStorage};

        let storage: SharedStorage = if BrowserStorage::is_available() {
            Rc::new(BrowserStorage::new())
        } else {
            log::warn!("⚠️ localStorage unavailable, state will not survive reloads");
            Rc::new(MemoryStorage::new())
        };

        Self::new(crate::config::CONFIG.clone(), Rc::new(GlooTransport::new()), storage)
    }

    /// First navigation. The cached identity is shown right away; the guard
    /// probe then confirms or clears it.
    pub async fn start(&self, initial: Route) -> NavigationOutcome {
        log::info!(
            "🎬 Starting on {} (cached user: {})",
            initial.name(),
            if self.identity.is_authenticated() { self.identity.display_name() } else { "none".to_string() }
        );
        self.guard.navigate(initial).await
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn preferences(&self) -> &PreferencesState {
        &self.preferences
    }

    pub fn identity(&self) -> &IdentityState {
        &self.identity
    }

    pub fn alerts(&self) -> &AlertService {
        &self.alerts
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn session(&self) -> &SessionService {
        &self.session
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn guard(&self) -> &NavigationGuard {
        &self.guard
    }

    pub fn orders(&self) -> &OrderService {
        &self.orders
    }

    pub fn maps(&self) -> &MapService {
        &self.maps
    }
}
