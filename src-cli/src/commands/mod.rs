//! Command handlers.

pub mod fix;
pub mod render;
pub mod report;
pub mod scan;

use crate::cli::{Cli, Command};
use anyhow::Context;
use mailprobe_core::{AppConfig, ConfigError, Result};
use std::path::Path;
use std::process::ExitCode;

/// Exit status used when the scanned message is blocked.
pub const EXIT_BLOCKED: u8 = 3;

/// Run the selected command and return the process exit status.
pub async fn dispatch(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli.config.as_deref()).context("loading config")?;

    match cli.command {
        Command::Render(args) => render::run(&args),
        Command::Scan(args) => scan::run(&args, &config).await,
        Command::Fix(args) => fix::run(&args, &config),
        Command::Report(args) => report::run(&args),
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from(path)?,
        None => match AppConfig::load() {
            Ok(config) => config,
            Err(ConfigError::NoConfigDir) => {
                tracing::debug!("No config directory available, using defaults");
                AppConfig::default()
            }
            Err(e) => return Err(e.into()),
        },
    };
    Ok(config.with_env_overrides())
}
