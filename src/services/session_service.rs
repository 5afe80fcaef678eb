// ============================================================================
// SESSION SERVICE - One place that reacts to a dead session
// ============================================================================
// Both the gateway interceptor and the navigation guard call
// `handle_invalidation`. Its effects are idempotent: the alert is an
// overwrite and the redirect is a no-op when already on sign-in.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::models::UserRecord;
use crate::router::{Router, SIGN_IN_ROUTE};
use crate::services::alert_service::{AlertOptions, AlertService};
use crate::state::IdentityState;
use crate::utils::constants::{SESSION_EXPIRED_KEY, WELCOME_BACK_KEY};

#[derive(Clone)]
pub struct SessionService {
    alerts: AlertService,
    identity: IdentityState,
    router: Router,
    handling: Rc<Cell<bool>>,
}

impl SessionService {
    pub fn new(alerts: AlertService, identity: IdentityState, router: Router) -> Self {
        Self {
            alerts,
            identity,
            router,
            handling: Rc::new(Cell::new(false)),
        }
    }

    /// Clear the identity, show the "session expired" alert and send the
    /// user to sign-in.
    ///
    /// Returns `false` when called re-entrantly from inside its own effects
    /// (a subscriber reacting to the alert or the redirect); the outer call
    /// is already doing the work.
    pub fn handle_invalidation(&self) -> bool {
        if self.handling.replace(true) {
            log::debug!("🔁 Session invalidation already in progress, ignoring nested call");
            return false;
        }

        log::warn!("🔒 Session invalidated by server, redirecting to {}", SIGN_IN_ROUTE.name());
        self.identity.clear_user();
        self.alerts.show(AlertOptions::error().message(SESSION_EXPIRED_KEY));
        self.router.navigate_to(SIGN_IN_ROUTE);

        self.handling.set(false);
        true
    }

    /// Store the principal returned by a successful sign-in and greet them.
    pub fn establish(&self, user: UserRecord) {
        let name = user.display_name();
        log::info!("✅ Signed in as {}", name);
        self.identity.set_user(user);
        self.alerts
            .show(AlertOptions::success().message(WELCOME_BACK_KEY).param("name", name));
    }

    /// User-initiated sign-out: no alert, straight to sign-in.
    pub fn logout(&self) {
        log::info!("👋 Logout");
        self.identity.clear_user();
        self.router.navigate_to(SIGN_IN_ROUTE);
    }

    pub fn identity(&self) -> &IdentityState {
        &self.identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Route;
    use crate::services::alert_service::Severity;
    use crate::state::PreferencesState;
    use crate::utils::i18n::Catalog;
    use crate::utils::storage::MemoryStorage;

    struct Fixture {
        session: SessionService,
        alerts: AlertService,
        identity: IdentityState,
        router: Router,
    }

    fn fixture() -> Fixture {
        let storage = Rc::new(MemoryStorage::new());
        let prefs = PreferencesState::new(storage.clone());
        let alerts = AlertService::new(prefs, Rc::new(Catalog::builtin()));
        let identity = IdentityState::new(storage);
        let router = Router::new();
        router.navigate_to(Route::App);
        let session = SessionService::new(alerts.clone(), identity.clone(), router.clone());
        Fixture { session, alerts, identity, router }
    }

    fn signed_in_user() -> UserRecord {
        UserRecord {
            username: Some("dara".into()),
            ..UserRecord::default()
        }
    }

    #[test]
    fn test_invalidation_clears_alerts_and_redirects() {
        let f = fixture();
        f.identity.set_user(signed_in_user());

        assert!(f.session.handle_invalidation());

        assert!(!f.identity.is_authenticated());
        let alert = f.alerts.state();
        assert!(alert.visible);
        assert_eq!(alert.severity, Severity::Error);
        assert_eq!(alert.message, "Your session has expired. Please sign in again.");
        assert_eq!(f.router.current_route(), Some(Route::SignIn));
    }

    #[test]
    fn test_repeated_invalidation_is_idempotent() {
        let f = fixture();
        f.session.handle_invalidation();
        let first = f.alerts.state();
        f.session.handle_invalidation();

        assert_eq!(f.alerts.state(), first);
        assert_eq!(f.router.history(), vec![Route::App, Route::SignIn]);
    }

    #[test]
    fn test_nested_invalidation_is_ignored() {
        let f = fixture();
        let nested = Rc::new(Cell::new(None));
        {
            let nested = nested.clone();
            let session = f.session.clone();
            f.alerts.subscribe(move || nested.set(Some(session.handle_invalidation())));
        }

        assert!(f.session.handle_invalidation());
        assert_eq!(nested.get(), Some(false));
        assert_eq!(f.router.history(), vec![Route::App, Route::SignIn]);
    }

    #[test]
    fn test_establish_greets_user() {
        let f = fixture();
        f.session.establish(signed_in_user());

        assert!(f.identity.is_authenticated());
        let alert = f.alerts.state();
        assert_eq!(alert.severity, Severity::Success);
        assert_eq!(alert.message, "Welcome back, dara!");
    }

    #[test]
    fn test_logout_has_no_alert() {
        let f = fixture();
        f.identity.set_user(signed_in_user());
        f.session.logout();

        assert!(!f.identity.is_authenticated());
        assert!(!f.alerts.is_visible());
        assert_eq!(f.router.current_route(), Some(Route::SignIn));
    }
}
