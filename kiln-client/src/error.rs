//! Error types for the Kiln client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the sandbox backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// Submission was refused locally, before any network call
    #[error("nothing to submit: source is empty")]
    EmptySource,

    /// Job creation was rejected by the backend
    #[error("create job failed (status {status})")]
    CreateFailed {
        /// HTTP status code
        status: u16,
    },

    /// Run trigger was rejected by the backend
    #[error("run job failed (status {status}): {message}")]
    RunFailed {
        /// HTTP status code
        status: u16,
        /// Backend-supplied detail when present, else a generic message
        message: String,
    },

    /// Status or log fetch was rejected by the backend
    #[error("fetch failed (status {status})")]
    FetchFailed {
        /// HTTP status code
        status: u16,
    },

    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl ClientError {
    /// Create a run failure from a status code and an optional backend detail
    pub fn run_failed(status: u16, detail: Option<String>) -> Self {
        Self::RunFailed {
            status,
            message: detail.unwrap_or_else(|| "backend returned an error".to_string()),
        }
    }

    fn status(&self) -> Option<u16> {
        match self {
            Self::CreateFailed { status }
            | Self::RunFailed { status, .. }
            | Self::FetchFailed { status } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error carries a 4xx status
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(s) if (400..500).contains(&s))
    }

    /// Check if this error carries a 5xx status
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(s) if s >= 500)
    }
}
