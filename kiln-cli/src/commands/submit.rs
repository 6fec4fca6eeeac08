//! Submit command
//!
//! Reads source text, validates it is non-empty, creates and starts a job,
//! then watches it to a terminal state.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use kiln_client::SandboxClient;

use super::{PollArgs, job};
use crate::config::Config;

/// Arguments for `kiln submit`
#[derive(Args)]
pub struct SubmitArgs {
    /// Source file to submit; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Entry-point file name the backend should execute
    #[arg(long, default_value = "main.py")]
    pub entry: String,

    #[command(flatten)]
    pub poll: PollArgs,
}

/// Handle `kiln submit`
pub async fn handle_submit(args: SubmitArgs, config: &Config) -> Result<()> {
    let code = read_source(args.file.as_deref())?;

    // Rejected before the client is even built; an empty submission must not
    // reach the network.
    if code.trim().is_empty() {
        anyhow::bail!("source is empty; paste or pipe some code before submitting");
    }

    let client = SandboxClient::new(&config.backend_url);
    let job_id = client.submit_job(&args.entry, &code).await?;

    println!(
        "{} Submitted job {} (entry {})",
        "▸".cyan(),
        job_id.to_string().bold(),
        args.entry.dimmed()
    );

    job::watch_job(client, job_id, &args.poll).await
}

/// Read source text from a file or stdin
fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut code = String::new();
            std::io::stdin()
                .read_to_string(&mut code)
                .context("failed to read source from stdin")?;
            Ok(code)
        }
    }
}
