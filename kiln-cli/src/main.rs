//! Kiln CLI
//!
//! Command-line client for the Kiln sandbox backend: submit source code as
//! jobs, trigger execution, and watch them to completion.

mod commands;
mod config;
mod view;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kiln")]
#[command(about = "Kiln sandbox CLI", long_about = None)]
struct Cli {
    /// Sandbox backend URL
    #[arg(
        long,
        env = "KILN_BACKEND_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    backend_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics stay out of the interactive output unless asked for.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kiln_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let config = Config {
        backend_url: cli.backend_url,
    };

    handle_command(cli.command, &config).await
}
