//! Error types for the browser stub layer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("browser launch failed: {0}")]
    Launch(String),

    #[error("CDP error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    #[error("invalid protocol parameters: {0}")]
    Protocol(String),

    #[error("timed out after {ms} ms waiting for {what}")]
    Timeout { what: String, ms: u64 },

    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("invalid route pattern `{pattern}`: {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BrowserError {
    pub(crate) fn timeout(what: impl Into<String>, timeout: std::time::Duration) -> Self {
        Self::Timeout {
            what: what.into(),
            ms: timeout.as_millis() as u64,
        }
    }
}

pub type BrowserResult<T> = Result<T, BrowserError>;
