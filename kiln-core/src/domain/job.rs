//! Job domain types

use serde::{Deserialize, Serialize};

/// Opaque job handle assigned by the sandbox backend.
///
/// The backend decides the shape of its identifiers; the client only ever
/// compares and displays them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Job execution status as reported by the backend.
///
/// Only `FINISHED` and `FAILED` are terminal. The non-terminal set is open:
/// any other label (`QUEUED`, `RUNNING`, whatever the backend grows next) is
/// carried verbatim and treated as still-waiting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    /// Terminal, the job ran to completion.
    Finished,
    /// Terminal, the job did not complete successfully.
    Failed,
    /// Any non-terminal label, kept exactly as the backend reported it.
    Waiting(String),
}

impl JobStatus {
    /// Whether no further transitions are expected for this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Failed)
    }

    /// The wire label for this status.
    pub fn label(&self) -> &str {
        match self {
            Self::Finished => "FINISHED",
            Self::Failed => "FAILED",
            Self::Waiting(label) => label,
        }
    }
}

impl From<String> for JobStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "FINISHED" => Self::Finished,
            "FAILED" => Self::Failed,
            _ => Self::Waiting(label),
        }
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        status.label().to_string()
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Job record as returned by `GET /jobs/{id}`.
///
/// Only `status` is guaranteed; the remaining fields are whatever the
/// backend's job store chooses to expose. Timestamps arrive without an
/// offset, hence the naive representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub id: Option<JobId>,
    pub status: JobStatus,
    #[serde(default)]
    pub entry: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::NaiveDateTime>,
    #[serde(default)]
    pub started_at: Option<chrono::NaiveDateTime>,
    #[serde(default)]
    pub finished_at: Option<chrono::NaiveDateTime>,
    #[serde(default)]
    pub exit_code: Option<i32>,
    #[serde(default)]
    pub reason: Option<String>,
}
