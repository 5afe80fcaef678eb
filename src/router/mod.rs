// ============================================================================
// ROUTER - Named routes + current location
// ============================================================================

pub mod guard;

pub use guard::{NavigationGuard, NavigationOutcome};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::state::ReactiveState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    SignIn,
    SignUp,
    /// Home page; requires a live session.
    App,
}

/// Where every invalidation ends up. Shared by the gateway and the guard.
pub const SIGN_IN_ROUTE: Route = Route::SignIn;

impl Route {
    pub const ALL: [Route; 3] = [Route::SignIn, Route::SignUp, Route::App];

    pub fn name(&self) -> &'static str {
        match self {
            Route::SignIn => "SignIn",
            Route::SignUp => "SignUp",
            Route::App => "App",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::SignIn => "/sign-in",
            Route::SignUp => "/sign-up",
            Route::App => "/",
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(self, Route::App)
    }

    /// Unknown paths land on the home page (which is protected).
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        Route::ALL
            .into_iter()
            .find(|route| route.path().trim_end_matches('/') == trimmed)
            .unwrap_or(Route::App)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Route::ALL.into_iter().find(|route| route.name() == name)
    }
}

/// Current location plus the list of committed navigations.
///
/// `sequence` moves on every navigation attempt, committed or not. A pending
/// guarded navigation holds the value it started with and gives up once
/// anything newer has happened.
#[derive(Clone, Default)]
pub struct Router {
    current: ReactiveState<Option<Route>>,
    history: Rc<RefCell<Vec<Route>>>,
    sequence: Rc<Cell<u64>>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_route(&self) -> Option<Route> {
        self.current.get()
    }

    /// Start a navigation that commits later. Supersedes any pending one.
    pub fn begin_navigation(&self) -> u64 {
        self.sequence.set(self.sequence.get() + 1);
        self.sequence.get()
    }

    /// `false` once a newer navigation started after `ticket` was taken.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.sequence.get() == ticket
    }

    /// Commit a navigation. Navigating to the current route is a no-op and
    /// returns `false`; it still supersedes pending navigations.
    pub fn navigate_to(&self, route: Route) -> bool {
        self.begin_navigation();

        if self.current_route() == Some(route) {
            log::debug!("🧭 Already on {}, skipping navigation", route.name());
            return false;
        }

        log::info!("🧭 Navigating to {} ({})", route.name(), route.path());
        self.history.borrow_mut().push(route);
        push_browser_history(route);
        self.current.set(Some(route));
        true
    }

    pub fn history(&self) -> Vec<Route> {
        self.history.borrow().clone()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.current.subscribe(callback);
    }
}

#[cfg(target_arch = "wasm32")]
fn push_browser_history(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path())) {
        log::warn!("⚠️ history.pushState failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn push_browser_history(_route: Route) {}

/// Path of the page the browser opened on.
#[cfg(target_arch = "wasm32")]
pub fn initial_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::App)
}
