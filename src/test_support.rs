// Test doubles shared by the unit tests: a scripted transport, a storage that
// always fails, and a fully wired harness.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::models::UserRecord;
use crate::router::{NavigationGuard, Route, Router};
use crate::services::{
    AlertService, ApiClient, HttpRequest, HttpResponse, HttpTransport, MapService, OrderService, SessionService,
};
use crate::state::{CollectionState, IdentityState, PreferencesState};
use crate::utils::i18n::Catalog;
use crate::utils::storage::{KeyValueStorage, MemoryStorage};

/// Answers by URL path. A configured answer sticks until replaced;
/// unconfigured paths get a 404. A held path answers only after `release`.
#[derive(Default)]
pub struct ScriptedTransport {
    answers: RefCell<HashMap<String, AppResult<HttpResponse>>>,
    sent: RefCell<Vec<HttpRequest>>,
    held: RefCell<HashSet<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, status: u16, body: &str) {
        let response = HttpResponse {
            status,
            status_text: status_text(status).to_string(),
            body: body.to_string(),
        };
        self.answers.borrow_mut().insert(path.to_string(), Ok(response));
    }

    pub fn fail(&self, path: &str, error: AppError) {
        self.answers.borrow_mut().insert(path.to_string(), Err(error));
    }

    /// Requests to `path` stay in flight until `release(path)`.
    pub fn hold(&self, path: &str) {
        self.held.borrow_mut().insert(path.to_string());
    }

    pub fn release(&self, path: &str) {
        self.held.borrow_mut().remove(path);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }
}

fn path_of(url: &str) -> &str {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let path = without_scheme.find('/').map(|i| &without_scheme[i..]).unwrap_or("/");
    path.split(['?', '#']).next().unwrap_or(path)
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        401 => "Unauthorized",
        404 => "Not Found",
        419 => "Page Expired",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "",
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        let path = path_of(&request.url).to_string();
        self.sent.borrow_mut().push(request);
        while self.held.borrow().contains(&path) {
            tokio::task::yield_now().await;
        }
        self.answers.borrow().get(&path).cloned().unwrap_or_else(|| {
            Ok(HttpResponse {
                status: 404,
                status_text: status_text(404).to_string(),
                body: String::new(),
            })
        })
    }
}

/// Every operation fails, like a browser with storage disabled.
pub struct FailingStorage;

impl KeyValueStorage for FailingStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Err(AppError::Storage(format!("read {} refused", key)))
    }

    fn set_item(&self, key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::Storage(format!("write {} refused", key)))
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        Err(AppError::Storage(format!("remove {} refused", key)))
    }
}

/// Everything wired the way `App` wires it, with handles for assertions.
pub struct TestHarness {
    pub transport: Rc<ScriptedTransport>,
    pub preferences: PreferencesState,
    pub identity: IdentityState,
    pub alerts: AlertService,
    pub router: Router,
    pub session: SessionService,
    pub api: ApiClient,
    pub guard: NavigationGuard,
    pub orders: OrderService,
    pub maps: MapService,
    shown: Rc<Cell<usize>>,
}

impl TestHarness {
    pub fn new(base_url: &str) -> Self {
        let storage = Rc::new(MemoryStorage::new());
        let transport = Rc::new(ScriptedTransport::new());

        let preferences = PreferencesState::new(storage.clone());
        let identity = IdentityState::new(storage);
        let alerts = AlertService::new(preferences.clone(), Rc::new(Catalog::builtin()));
        let router = Router::new();
        let session = SessionService::new(alerts.clone(), identity.clone(), router.clone());
        let api = ApiClient::new(&AppConfig::new(base_url), transport.clone(), session.clone());
        let guard = NavigationGuard::new(router.clone(), api.clone(), session.clone());
        let orders = OrderService::new(api.clone(), CollectionState::new());
        let maps = MapService::new(api.clone(), CollectionState::new());

        let shown = Rc::new(Cell::new(0));
        {
            let shown = shown.clone();
            let watched = alerts.clone();
            alerts.subscribe(move || {
                if watched.is_visible() {
                    shown.set(shown.get() + 1);
                }
            });
        }

        Self {
            transport,
            preferences,
            identity,
            alerts,
            router,
            session,
            api,
            guard,
            orders,
            maps,
            shown,
        }
    }

    /// A signed-in user already sitting on `route`.
    pub fn signed_in_on(route: Route) -> Self {
        let harness = Self::default();
        harness.identity.set_user(UserRecord {
            username: Some("dara".into()),
            ..UserRecord::default()
        });
        harness.router.navigate_to(route);
        harness
    }

    /// How many times an alert was shown.
    pub fn alert_count(&self) -> usize {
        self.shown.get()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new("http://api.test")
    }
}
