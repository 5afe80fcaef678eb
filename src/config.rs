use serde::{Deserialize, Serialize};

use crate::utils::constants::{BACKEND_URL, MAP_PROVIDER_KEY};

/// Runtime configuration. Only passthrough values: the backend address and
/// the map provider key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub map_provider_key: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),
            map_provider_key: MAP_PROVIDER_KEY.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Explicit configuration, mostly for tests and embedding.
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self {
            backend_url: BACKEND_URL.to_string(),
            map_provider_key: MAP_PROVIDER_KEY.to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
        }
    }

    /// Backend base URL without a trailing slash
    pub fn backend_url(&self) -> &str {
        self.backend_url.trim_end_matches('/')
    }

    pub fn map_provider_key(&self) -> &str {
        &self.map_provider_key
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Build-time configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
