//! Job poller
//!
//! Drives one submitted job to completion by repeatedly fetching its status
//! and log snapshot until the backend reports a terminal state. Each
//! observation is forwarded over a channel, tagged with the job it came
//! from, so a display can tell live updates apart from a stale poll.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time;
use tracing::{debug, warn};

use kiln_core::domain::job::{JobId, JobStatus};
use kiln_core::domain::log::LogSnapshot;

use crate::SandboxClient;

/// Polling cadence configuration
///
/// The tick interval is a tunable, not a correctness constant; only the
/// stop-on-terminal rule matters for correctness.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between ticks before backoff kicks in
    pub interval: Duration,

    /// Number of consecutive ticks after which the delay starts doubling
    pub backoff_after: u32,

    /// Upper bound on the backed-off delay
    pub max_interval: Duration,

    /// Give up after this much total wall time without a terminal status;
    /// `None` polls until the job resolves
    pub deadline: Option<Duration>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(600),
            backoff_after: 20,
            max_interval: Duration::from_secs(5),
            deadline: None,
        }
    }
}

/// One tick's observation of a job
#[derive(Debug, Clone)]
pub struct PollUpdate {
    /// The job this observation came from
    pub job_id: JobId,
    /// Status at the time of the tick
    pub status: JobStatus,
    /// Full log snapshot at the time of the tick
    pub logs: LogSnapshot,
}

/// Ways a poll can end without observing a terminal status
#[derive(Debug, Error)]
pub enum PollError {
    /// The configured deadline elapsed first
    #[error("job {job_id} did not reach a terminal state within {waited:?}")]
    DeadlineExceeded { job_id: JobId, waited: Duration },

    /// The update receiver was dropped; the caller no longer cares
    #[error("watch for job {job_id} was cancelled")]
    Cancelled { job_id: JobId },
}

/// Polls one job until the backend reports a terminal status
pub struct JobPoller {
    client: SandboxClient,
    config: PollConfig,
}

impl JobPoller {
    /// Creates a poller with the default cadence
    pub fn new(client: SandboxClient) -> Self {
        Self::with_config(client, PollConfig::default())
    }

    /// Creates a poller with a custom cadence
    pub fn with_config(client: SandboxClient, config: PollConfig) -> Self {
        Self { client, config }
    }

    /// Runs the polling loop
    ///
    /// Each tick fetches the job's status and then its log snapshot and
    /// forwards both as one [`PollUpdate`]. A failed tick (transport error,
    /// non-2xx response, unparsable body) is logged and retried on the next
    /// tick; only an observed `FINISHED` or `FAILED` ends the loop, after
    /// which no further requests are made for this job. Dropping the
    /// receiving end of `updates` cancels the poll at the next send.
    pub async fn run(
        &self,
        job_id: JobId,
        updates: mpsc::Sender<PollUpdate>,
    ) -> Result<JobStatus, PollError> {
        debug!("starting poll of job {} ({:?})", job_id, self.config.interval);

        let started = time::Instant::now();
        let mut delay = self.config.interval;
        let mut ticks: u32 = 0;

        loop {
            time::sleep(delay).await;

            if let Some(deadline) = self.config.deadline {
                if started.elapsed() >= deadline {
                    return Err(PollError::DeadlineExceeded {
                        job_id,
                        waited: started.elapsed(),
                    });
                }
            }

            match self.poll_once(&job_id).await {
                Ok(update) => {
                    let status = update.status.clone();
                    if updates.send(update).await.is_err() {
                        debug!("update receiver for job {} dropped", job_id);
                        return Err(PollError::Cancelled { job_id });
                    }
                    if status.is_terminal() {
                        debug!("job {} reached terminal status {}", job_id, status);
                        return Ok(status);
                    }
                }
                Err(e) => {
                    // Transient; the next tick retries.
                    warn!("poll tick for job {} failed: {}", job_id, e);
                }
            }

            ticks += 1;
            if ticks >= self.config.backoff_after {
                delay = (delay * 2).min(self.config.max_interval);
            }
        }
    }

    /// Fetches one status/log pair
    ///
    /// The two reads are separate round trips and may straddle a backend
    /// transition; the pair reflects the latest observable state, not an
    /// atomic snapshot.
    async fn poll_once(&self, job_id: &JobId) -> crate::Result<PollUpdate> {
        let job = self.client.get_job(job_id).await?;
        let logs = self.client.get_logs(job_id).await?;

        Ok(PollUpdate {
            job_id: job_id.clone(),
            status: job.status,
            logs,
        })
    }
}
