//! Kiln HTTP Client
//!
//! A type-safe HTTP client for the Kiln sandbox backend, plus the poller
//! that drives a submitted job to completion.
//!
//! # Example
//!
//! ```no_run
//! use kiln_client::SandboxClient;
//!
//! #[tokio::main]
//! async fn main() -> kiln_client::Result<()> {
//!     let client = SandboxClient::new("http://127.0.0.1:8000");
//!
//!     // Create a job and trigger its execution
//!     let job_id = client.submit_job("main.py", "print(1)").await?;
//!
//!     println!("Submitted job: {}", job_id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;
pub mod poller;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use poller::{JobPoller, PollConfig, PollError, PollUpdate};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the sandbox job API
///
/// Wraps the backend's four job operations (create, run, status, logs) as
/// request/response contracts. Every call is a fresh round trip; there is no
/// local caching, and status and logs fetched back to back may reflect
/// slightly different instants of backend state.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    /// Base URL of the backend (e.g., "http://127.0.0.1:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl SandboxClient {
    /// Create a new sandbox client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend API (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new sandbox client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Deserialize a successful response body
    ///
    /// Status-code handling is per endpoint (the error taxonomy differs);
    /// this only turns a 2xx body into a typed value.
    pub(crate) async fn parse_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("failed to parse JSON response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SandboxClient::new("http://127.0.0.1:8000");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = SandboxClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = SandboxClient::with_client("http://127.0.0.1:8000", http_client);
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
    }
}
