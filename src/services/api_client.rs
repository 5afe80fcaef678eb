// ============================================================================
// API CLIENT - Shared request gateway
// ============================================================================
// One client configuration for every caller: base URL, cookies included,
// JSON content type. Every response goes through `intercept`, which turns
// an invalid-session status into the central invalidation handling and
// still hands the error back to the caller.
// ============================================================================

use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::services::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::services::session_service::SessionService;
use crate::utils::constants::{is_session_invalid_status, CHECK_SESSION_PATH};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    session: SessionService,
}

impl ApiClient {
    pub fn new(config: &AppConfig, transport: Rc<dyn HttpTransport>, session: SessionService) -> Self {
        Self {
            base_url: config.backend_url().to_string(),
            transport,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `base_url` + `path`, with exactly one slash between them.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn build_request(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            url: self.url(path),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body,
            with_credentials: true,
        }
    }

    /// Send one request through the interceptor.
    pub async fn send(&self, method: HttpMethod, path: &str, body: Option<String>) -> AppResult<HttpResponse> {
        let request = self.build_request(method, path, body);
        log::debug!("🌐 {:?} {}", request.method, request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("❌ Request to {} failed: {}", path, e);
            e
        })?;

        self.intercept(path, response)
    }

    fn intercept(&self, path: &str, response: HttpResponse) -> AppResult<HttpResponse> {
        if is_session_invalid_status(response.status) {
            log::warn!("🔒 {} answered HTTP {}", path, response.status);
            self.session.handle_invalidation();
            return Err(AppError::SessionInvalid { status: response.status });
        }

        if !response.ok() {
            return Err(AppError::Http {
                status: response.status,
                status_text: response.status_text,
            });
        }

        Ok(response)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.send(HttpMethod::Get, path, None).await?.json()
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> AppResult<T> {
        let body = serde_json::to_string(body).map_err(|e| AppError::Serialization(e.to_string()))?;
        self.send(HttpMethod::Post, path, Some(body)).await?.json()
    }

    /// Liveness probe: `Ok(())` only when the server confirms the session.
    pub async fn check_session(&self) -> AppResult<()> {
        self.send(HttpMethod::Get, CHECK_SESSION_PATH, None).await.map(|_| ())
    }
}
