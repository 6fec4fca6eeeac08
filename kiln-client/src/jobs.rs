//! Job-related API endpoints

use crate::SandboxClient;
use crate::error::{ClientError, Result};
use kiln_core::domain::job::{Job, JobId};
use kiln_core::domain::log::LogSnapshot;
use kiln_core::dto::job::{ApiErrorBody, CreateJob, CreatedJob, RunAck};

impl SandboxClient {
    // =============================================================================
    // Job Lifecycle
    // =============================================================================

    /// Create a new job from an entry-point name and raw source text
    ///
    /// Creation is not idempotent: calling this twice creates two distinct
    /// jobs. A non-2xx response maps to [`ClientError::CreateFailed`] with no
    /// detail beyond the status code.
    ///
    /// # Returns
    /// The backend-assigned job id
    pub async fn create_job(&self, entry: &str, code: &str) -> Result<JobId> {
        let url = format!("{}/jobs", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&CreateJob {
                entry: entry.to_string(),
                code: code.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::CreateFailed {
                status: status.as_u16(),
            });
        }

        let created: CreatedJob = self.parse_json(response).await?;
        Ok(created.job_id)
    }

    /// Signal the backend to begin executing an already-created job
    ///
    /// Must be called after [`create_job`](Self::create_job) succeeds and
    /// before any polling. Triggering an unknown or already-finished job is
    /// the backend's error to report, not a client-side check; a non-2xx
    /// response maps to [`ClientError::RunFailed`] carrying the backend's
    /// `detail` message when the error body provides one.
    pub async fn run_job(&self, job_id: &JobId) -> Result<bool> {
        let url = format!("{}/jobs/{}/run", self.base_url, job_id);
        let response = self.client.post(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail);
            return Err(ClientError::run_failed(status.as_u16(), detail));
        }

        let ack: RunAck = self.parse_json(response).await?;
        Ok(ack.ok)
    }

    /// Fetch the current job record
    pub async fn get_job(&self, job_id: &JobId) -> Result<Job> {
        let url = format!("{}/jobs/{}", self.base_url, job_id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::FetchFailed {
                status: status.as_u16(),
            });
        }

        self.parse_json(response).await
    }

    /// Fetch the current stdout/stderr snapshot
    pub async fn get_logs(&self, job_id: &JobId) -> Result<LogSnapshot> {
        let url = format!("{}/jobs/{}/logs", self.base_url, job_id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::FetchFailed {
                status: status.as_u16(),
            });
        }

        self.parse_json(response).await
    }

    /// Create a job and trigger its execution
    ///
    /// Issues exactly one create call followed by exactly one run call, in
    /// that order; the first failure aborts the submission. Empty source is
    /// rejected locally with [`ClientError::EmptySource`] before any network
    /// call. There is no automatic retry on either step, the caller
    /// resubmits.
    pub async fn submit_job(&self, entry: &str, code: &str) -> Result<JobId> {
        if code.trim().is_empty() {
            return Err(ClientError::EmptySource);
        }

        let job_id = self.create_job(entry, code).await?;
        self.run_job(&job_id).await?;
        Ok(job_id)
    }
}
