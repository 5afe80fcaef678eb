// ============================================================================
// COURIER DESK PWA - Session-aware client core (RUST + WASM)
// ============================================================================
// - State: Rc<RefCell> holders with subscribers (identity, preferences,
//   collections, alert)
// - Services: one API gateway, session invalidation, collection sync
// - Router: named routes + liveness-probing navigation guard
// - App: composition root, one instance per page
// ============================================================================

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

pub use app::App;
pub use error::{AppError, AppResult};

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;

    use crate::app::App;
    use crate::config::CONFIG;
    use crate::router::{initial_route, Route};
    use crate::utils::i18n::Locale;

    // The page's single App instance
    thread_local! {
        static APP: RefCell<Option<Rc<App>>> = RefCell::new(None);
    }

    fn with_app(action: impl FnOnce(Rc<App>)) {
        match APP.with(|cell| cell.borrow().clone()) {
            Some(app) => action(app),
            None => log::warn!("⚠️ App is not initialized"),
        }
    }

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();

        if CONFIG.is_logging_enabled() {
            let level = if CONFIG.is_production() { log::Level::Info } else { log::Level::Debug };
            wasm_logger::init(wasm_logger::Config::new(level));
        }
        log::info!("🚀 Courier Desk starting ({})", CONFIG.environment);

        let app = Rc::new(App::in_browser());
        APP.with(|cell| *cell.borrow_mut() = Some(app.clone()));

        spawn_local(async move {
            app.start(initial_route()).await;
        });
    }

    /// Navigate by path, through the guard.
    #[wasm_bindgen]
    pub fn navigate(path: String) {
        with_app(|app| {
            let route = Route::from_path(&path);
            spawn_local(async move {
                app.guard().navigate(route).await;
            });
        });
    }

    #[wasm_bindgen]
    pub fn close_alert() {
        with_app(|app| app.alerts().close());
    }

    #[wasm_bindgen]
    pub fn switch_language(code: String) {
        with_app(|app| app.preferences().switch_locale(Locale::from_code(&code)));
    }

    #[wasm_bindgen]
    pub fn toggle_sidebar() {
        with_app(|app| app.preferences().toggle_sidebar());
    }

    #[wasm_bindgen]
    pub fn refresh_orders() {
        with_app(|app| {
            spawn_local(async move {
                app.preferences().show_loading(None);
                if let Err(e) = app.orders().fetch_orders().await {
                    log::error!("❌ Orders refresh failed: {}", e);
                }
                app.preferences().hide_loading();
            });
        });
    }

    #[wasm_bindgen]
    pub fn refresh_maps() {
        with_app(|app| {
            spawn_local(async move {
                if let Err(e) = app.maps().fetch_maps().await {
                    log::error!("❌ Map entries refresh failed: {}", e);
                }
            });
        });
    }

    #[wasm_bindgen]
    pub fn logout() {
        with_app(|app| app.session().logout());
    }
}
