pub mod http;
pub mod alert_service;
pub mod session_service;
pub mod api_client;
pub mod collection_sync;
pub mod order_service;
pub mod map_service;

pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
#[cfg(target_arch = "wasm32")]
pub use http::GlooTransport;
pub use alert_service::{AlertOptions, AlertService, AlertState, Severity};
pub use session_service::SessionService;
pub use api_client::ApiClient;
pub use collection_sync::CollectionSync;
pub use order_service::OrderService;
pub use map_service::MapService;
