//! Job command handlers
//!
//! Watching, status display, and log display for jobs the backend already
//! knows about.

use anyhow::{Context, Result};
use colored::*;
use kiln_client::{JobPoller, SandboxClient};
use kiln_core::domain::job::{Job, JobId, JobStatus};
use tokio::sync::mpsc;

use super::PollArgs;
use crate::config::Config;
use crate::view::{JobView, NO_ERROR, NO_RESULT, Tab};

/// Handle `kiln status`
pub async fn show_status(id: &str, config: &Config) -> Result<()> {
    let client = SandboxClient::new(&config.backend_url);
    let job = client.get_job(&JobId::from(id)).await?;

    print_job_details(&job);

    Ok(())
}

/// Handle `kiln logs`
pub async fn show_logs(id: &str, config: &Config) -> Result<()> {
    let client = SandboxClient::new(&config.backend_url);
    let logs = client.get_logs(&JobId::from(id)).await?;

    println!("{}", "stdout".bold());
    println!("{}", logs.stdout_text().unwrap_or(NO_RESULT));
    println!();
    println!("{}", "stderr".bold());
    println!("{}", logs.stderr_text().unwrap_or(NO_ERROR));

    Ok(())
}

/// Handle `kiln watch`
pub async fn handle_watch(id: &str, poll: PollArgs, config: &Config) -> Result<()> {
    let client = SandboxClient::new(&config.backend_url);
    watch_job(client, JobId::from(id), &poll).await
}

/// Poll a job to completion, rendering each observation through the view
///
/// Status transitions are echoed as they are observed; the panels are
/// printed once the job resolves. A `FAILED` terminal status becomes a
/// nonzero exit.
pub(crate) async fn watch_job(client: SandboxClient, job_id: JobId, poll: &PollArgs) -> Result<()> {
    let mut view = JobView::new();
    view.switch_tab(&poll.tab);
    view.focus(job_id.clone());

    let poller = JobPoller::with_config(client, poll.to_config());
    let (tx, mut rx) = mpsc::channel(16);

    let polled = job_id.clone();
    let handle = tokio::spawn(async move { poller.run(polled, tx).await });

    let mut last_status = String::new();
    while let Some(update) = rx.recv().await {
        if view.apply(&update) && view.panel(Tab::Status) != last_status {
            last_status = view.panel(Tab::Status).to_string();
            eprintln!("{}", last_status.as_str().dimmed());
        }
    }

    let status = handle.await.context("poller task panicked")??;

    print_panels(&view);

    if status == JobStatus::Failed {
        anyhow::bail!("job {} failed", job_id);
    }
    Ok(())
}

/// Print the three panels, highlighting the active tab's header
fn print_panels(view: &JobView) {
    println!();
    for tab in Tab::ALL {
        let header = if view.active_tab() == Some(tab) {
            tab.name().cyan().bold()
        } else {
            tab.name().dimmed()
        };
        println!("{}", header);
        println!("{}", "─".repeat(40).dimmed());
        println!("{}", view.panel(tab));
        println!();
    }
}

/// Print detailed job information
fn print_job_details(job: &Job) {
    println!("{}", "Job Details:".bold());
    if let Some(id) = &job.id {
        println!("  ID:        {}", id.to_string().cyan());
    }
    if let Some(entry) = &job.entry {
        println!("  Entry:     {}", entry);
    }
    if let Some(lang) = &job.lang {
        println!("  Lang:      {}", lang);
    }
    println!("  Status:    {}", colorize_status(&job.status));

    if let Some(created) = job.created_at {
        println!("  Created:   {}", created.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(started) = job.started_at {
        println!("  Started:   {}", started.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(finished) = job.finished_at {
        println!("  Finished:  {}", finished.format("%Y-%m-%d %H:%M:%S"));

        if let Some(started) = job.started_at {
            let duration = finished.signed_duration_since(started);
            println!("  Duration:  {}s", duration.num_seconds());
        }
    }
    if let Some(code) = job.exit_code {
        println!("  Exit code: {}", code);
    }
    if let Some(reason) = &job.reason {
        println!("  Reason:    {}", reason.red());
    }
}

/// Colorize a job status for display
fn colorize_status(status: &JobStatus) -> colored::ColoredString {
    match status {
        JobStatus::Finished => status.label().green(),
        JobStatus::Failed => status.label().red(),
        JobStatus::Waiting(_) => status.label().yellow(),
    }
}
