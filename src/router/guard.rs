// ============================================================================
// NAVIGATION GUARD - Liveness probe before protected routes
// ============================================================================

use crate::router::{Route, Router, SIGN_IN_ROUTE};
use crate::services::api_client::ApiClient;
use crate::services::session_service::SessionService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Entered(Route),
    /// `requested` was cancelled, the user is on `to` instead.
    Redirected { requested: Route, to: Route },
    /// A newer navigation (or a sign-in redirect) started while the probe
    /// was in flight; this one was dropped without touching the router.
    Superseded(Route),
}

#[derive(Clone)]
pub struct NavigationGuard {
    router: Router,
    api: ApiClient,
    session: SessionService,
}

impl NavigationGuard {
    pub fn new(router: Router, api: ApiClient, session: SessionService) -> Self {
        Self { router, api, session }
    }

    /// Navigate to `to`, probing the session first when the route is
    /// protected. Unprotected routes never touch the network.
    pub async fn navigate(&self, to: Route) -> NavigationOutcome {
        if !to.requires_session() {
            self.router.navigate_to(to);
            return NavigationOutcome::Entered(to);
        }

        let ticket = self.router.begin_navigation();
        let probe = self.api.check_session().await;

        match probe {
            // The gateway already redirected to sign-in
            Err(e) if e.is_session_invalid() => self.cancelled(to),
            _ if !self.router.is_current(ticket) => {
                log::info!("⏭️ Navigation to {} superseded while probing", to.name());
                NavigationOutcome::Superseded(to)
            }
            Ok(()) => {
                self.router.navigate_to(to);
                NavigationOutcome::Entered(to)
            }
            Err(e) => {
                log::warn!("🔒 Liveness probe failed before {}: {}", to.name(), e);
                self.session.handle_invalidation();
                self.cancelled(to)
            }
        }
    }

    fn cancelled(&self, requested: Route) -> NavigationOutcome {
        log::info!("⛔ Navigation to {} cancelled", requested.name());
        NavigationOutcome::Redirected {
            requested,
            to: SIGN_IN_ROUTE,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }
}
