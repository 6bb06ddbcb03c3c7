//! External content analyzer.
//!
//! The analyzer is an opaque process: it receives the path of a rendered
//! message and prints a free-text report on stdout.

use crate::error::{Result, ScanError};
use async_trait::async_trait;
use mailprobe_core::AnalyzerConfig;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Produces a free-text report for a message stored on disk.
#[async_trait]
pub trait ContentAnalyzer: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Analyze the message at `message_path` and return the report text.
    async fn analyze(&self, message_path: &Path) -> Result<String>;
}

/// Runs an executable as `<command> <args...> <message path>`.
#[derive(Debug, Clone)]
pub struct CommandAnalyzer {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandAnalyzer {
    /// Create an analyzer from an explicit command line and timeout.
    #[must_use]
    pub fn new(command: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            args,
            timeout,
        }
    }

    /// Create an analyzer from the `[analyzer]` config section.
    #[must_use]
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(
            config.command.clone(),
            config.args.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }
}

#[async_trait]
impl ContentAnalyzer for CommandAnalyzer {
    fn name(&self) -> &str {
        &self.command
    }

    async fn analyze(&self, message_path: &Path) -> Result<String> {
        tracing::debug!(
            "Running analyzer {} {:?} {}",
            self.command,
            self.args,
            message_path.display()
        );

        let mut command = Command::new(&self.command);
        command
            .args(&self.args)
            .arg(message_path)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| ScanError::AnalyzerTimeout {
                command: self.command.clone(),
                timeout: self.timeout,
            })?
            .map_err(|source| ScanError::AnalyzerUnavailable {
                command: self.command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        // A non-zero exit with a report is still a report.
        if !output.status.success() && stdout.trim().is_empty() {
            return Err(ScanError::AnalyzerFailed {
                command: self.command.clone(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let analyzer = CommandAnalyzer::from_config(&AnalyzerConfig::default());
        assert_eq!(analyzer.name(), "spamassassin");
        assert_eq!(analyzer.args, vec!["-t".to_string()]);
        assert_eq!(analyzer.timeout, Duration::from_secs(60));
    }

    #[tokio::test]
    async fn test_missing_executable_is_unavailable() {
        let analyzer = CommandAnalyzer::new(
            "mailprobe-no-such-analyzer",
            vec![],
            Duration::from_secs(5),
        );
        let err = analyzer
            .analyze(Path::new("/nonexistent.eml"))
            .await
            .expect_err("spawn must fail");
        assert!(matches!(err, ScanError::AnalyzerUnavailable { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failure_without_output() {
        let analyzer = CommandAnalyzer::new(
            "sh",
            vec!["-c".to_string(), "echo broken >&2; exit 3".to_string()],
            Duration::from_secs(5),
        );
        let err = analyzer
            .analyze(Path::new("/nonexistent.eml"))
            .await
            .expect_err("exit 3 without output must fail");
        match err {
            ScanError::AnalyzerFailed { status, stderr, .. } => {
                assert_eq!(status, Some(3));
                assert_eq!(stderr, "broken");
            }
            other => panic!("expected AnalyzerFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failure_with_output_is_accepted() {
        let analyzer = CommandAnalyzer::new(
            "sh",
            vec!["-c".to_string(), "echo ' 1.0 SOME_RULE text'; exit 1".to_string()],
            Duration::from_secs(5),
        );
        let report = analyzer
            .analyze(Path::new("/nonexistent.eml"))
            .await
            .expect("output is kept");
        assert!(report.contains("SOME_RULE"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_timeout() {
        let analyzer = CommandAnalyzer::new(
            "sh",
            vec!["-c".to_string(), "sleep 5".to_string()],
            Duration::from_millis(100),
        );
        let err = analyzer
            .analyze(Path::new("/nonexistent.eml"))
            .await
            .expect_err("must time out");
        assert!(matches!(err, ScanError::AnalyzerTimeout { .. }));
    }
}
