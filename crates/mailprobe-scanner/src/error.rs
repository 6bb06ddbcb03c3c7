use mailprobe_core::ConfigError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Analyzer '{command}' could not be started: {source}")]
    AnalyzerUnavailable {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Analyzer '{command}' timed out after {timeout:?}")]
    AnalyzerTimeout { command: String, timeout: Duration },

    #[error("Analyzer '{command}' failed with status {status:?}: {stderr}")]
    AnalyzerFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
