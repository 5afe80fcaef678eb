// ============================================================================
// HTTP TRANSPORT - Raw request/response exchange (no business logic)
// ============================================================================

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Send cookies with the request (`credentials: "include"`).
    pub with_credentials: bool,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_str(&self.body).map_err(|e| AppError::Parse(e.to_string()))
    }
}

/// The body could not be read off the wire. A transport failure, not a bad
/// payload, so it never reaches `json()` as an empty string.
pub fn body_read_error(e: impl std::fmt::Display) -> AppError {
    AppError::Network(format!("Failed to read response body: {}", e))
}

/// Anything able to perform one HTTP exchange.
///
/// Single-threaded: futures are not `Send`, like everything on the browser
/// event loop.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse>;
}

/// Browser fetch through gloo-net.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct GlooTransport;

#[cfg(target_arch = "wasm32")]
impl GlooTransport {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };

        if request.with_credentials {
            builder = builder.credentials(RequestCredentials::Include);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| AppError::Network(format!("Request build error: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(body_read_error)?;

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}
