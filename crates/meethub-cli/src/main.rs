mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use meethub_core::MeetHubError;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

const LOG_ENV: &str = "MEETHUB_LOG";

fn main() -> Result<()> {
    // stdout carries the JSON output, so logs go to stderr.
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let operation = cli.command.operation();
    let result = commands::run_from_root(&cli.root, cli.command);
    if let Err(err) = &result
        && let Some(core_err) = err.downcast_ref::<MeetHubError>()
    {
        let payload = core_err.to_payload(operation);
        error!(
            code = %payload.code,
            operation = %payload.operation,
            trace_id = %payload.trace_id,
            "command failed"
        );
    }
    result
}
