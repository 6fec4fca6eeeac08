//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod job;
mod submit;

pub use submit::SubmitArgs;

use std::time::Duration;

use anyhow::Result;
use clap::{Args, Subcommand};
use kiln_client::PollConfig;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit source code as a new job and watch it to completion
    Submit(SubmitArgs),
    /// Show a job's current status
    Status {
        /// Job ID assigned by the backend
        id: String,
    },
    /// Show a job's current log snapshot
    Logs {
        /// Job ID assigned by the backend
        id: String,
    },
    /// Poll an existing job until it reaches a terminal state
    Watch {
        /// Job ID assigned by the backend
        id: String,

        #[command(flatten)]
        poll: PollArgs,
    },
}

/// Polling and display flags shared by the watching commands
#[derive(Args)]
pub struct PollArgs {
    /// Milliseconds between poll ticks
    #[arg(long, default_value_t = 600)]
    pub interval_ms: u64,

    /// Give up after this many seconds without a terminal status
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Panel to leave active in the final output (stdout, stderr, status)
    #[arg(long, default_value = "stdout")]
    pub tab: String,
}

impl PollArgs {
    /// Builds the poller cadence from the flags.
    pub fn to_config(&self) -> PollConfig {
        PollConfig {
            interval: Duration::from_millis(self.interval_ms),
            deadline: self.timeout_secs.map(Duration::from_secs),
            ..PollConfig::default()
        }
    }
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Submit(args) => submit::handle_submit(args, config).await,
        Commands::Status { id } => job::show_status(&id, config).await,
        Commands::Logs { id } => job::show_logs(&id, config).await,
        Commands::Watch { id, poll } => job::handle_watch(&id, poll, config).await,
    }
}
