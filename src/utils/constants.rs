/// Backend base URL, set at compile time (see build.rs):
/// - Development: http://127.0.0.1:8000 (default)
/// - Production: BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8000",
};

/// Map provider key, passed through untouched to the map collaborator.
pub const MAP_PROVIDER_KEY: &str = match option_env!("MAP_PROVIDER_KEY") {
    Some(key) => key,
    None => "",
};

// Storage keys (one per persisted store)
pub const STORAGE_KEY_USER: &str = "userStore";
pub const STORAGE_KEY_LANG: &str = "langStore";
pub const STORAGE_KEY_SIDEBAR: &str = "sidebar";

// Endpoints
pub const CHECK_SESSION_PATH: &str = "/check-session";
pub const ORDERS_PATH: &str = "/orders";
pub const MAPS_PATH: &str = "/getMaps";

// Catalog keys used outside of page code
pub const SESSION_EXPIRED_KEY: &str = "sessionExpired";
pub const WELCOME_BACK_KEY: &str = "welcomeBack";

pub const HTTP_UNAUTHORIZED: u16 = 401;
/// Laravel-style "Page Expired", sent when the session cookie is stale.
pub const HTTP_SESSION_EXPIRED: u16 = 419;

pub const DEFAULT_LOADING_TEXT: &str = "Loading...";

/// True for the status codes the server uses to signal a dead session.
pub fn is_session_invalid_status(status: u16) -> bool {
    status == HTTP_UNAUTHORIZED || status == HTTP_SESSION_EXPIRED
}
