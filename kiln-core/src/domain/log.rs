//! Log domain types

use serde::{Deserialize, Serialize};

/// Full stdout/stderr capture as of one poll instant.
///
/// Snapshots are not cumulative: each fetch returns the backend's complete
/// current capture, and the latest snapshot wholly replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSnapshot {
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
}

impl LogSnapshot {
    /// Captured stdout, with an empty capture treated as absent.
    pub fn stdout_text(&self) -> Option<&str> {
        self.stdout.as_deref().filter(|s| !s.is_empty())
    }

    /// Captured stderr, with an empty capture treated as absent.
    pub fn stderr_text(&self) -> Option<&str> {
        self.stderr.as_deref().filter(|s| !s.is_empty())
    }
}
