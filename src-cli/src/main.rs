//! Mailprobe command-line shell.
//!
//! Thin entry point: parses arguments, sets up logging and dispatches to the
//! command handlers. Rendering, parsing and scanning live in `crates/`.

mod cli;
mod commands;
mod input;
mod output;

use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

/// Initialize tracing subscriber for logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_filter = if verbose { "info,mailprobe=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    tracing::debug!("Starting Mailprobe v{}", env!("CARGO_PKG_VERSION"));

    match commands::dispatch(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
