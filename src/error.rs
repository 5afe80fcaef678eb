// ============================================================================
// ERRORS - Error type shared by services, stores and the router
// ============================================================================

use thiserror::Error;

/// Every failure the client can observe.
///
/// `SessionInvalid` is special: by the time a caller sees it the
/// invalidation alert and the sign-in redirect have already happened, the
/// error only flows back so the caller's own failure path still runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Session invalidated by the server (HTTP {status})")]
    SessionInvalid { status: u16 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Malformed response envelope: {0}")]
    Envelope(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    pub fn is_session_invalid(&self) -> bool {
        matches!(self, AppError::SessionInvalid { .. })
    }
}

pub type AppResult<T> = Result<T, AppError>;
