//! Job DTOs for the sandbox HTTP API

use serde::{Deserialize, Serialize};

use crate::domain::job::JobId;

/// Request to create a new job: an entry-point name and raw source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJob {
    pub entry: String,
    pub code: String,
}

/// Response to job creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedJob {
    pub job_id: JobId,
}

/// Acknowledgement of a run trigger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunAck {
    #[serde(default)]
    pub ok: bool,
}

/// Error envelope the backend attaches to non-2xx responses.
///
/// Only the run-trigger path surfaces `detail` to the user; other endpoints
/// report a generic failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
