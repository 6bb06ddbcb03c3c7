//! Scan orchestration.
//!
//! A scan renders the header and body templates with a fresh
//! [`TagEngine`], hands the result to the analyzer through a file, then
//! parses and classifies the report.

use crate::analyzer::{CommandAnalyzer, ContentAnalyzer};
use crate::error::{Result, ScanError};
use mailprobe_core::{AppConfig, Verdict};
use mailprobe_report::{parse_report, Finding};
use mailprobe_template::{compose_message, TagEngine};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use uuid::Uuid;

/// Result of scanning one message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Scan identifier, also used in logs
    pub id: Uuid,
    /// Fully expanded message that was analyzed
    pub rendered: String,
    /// Score reported by the analyzer
    pub score: f64,
    /// Verdict for the score
    pub verdict: Verdict,
    /// Findings in report order
    pub findings: Vec<Finding>,
    /// Location of the rendered message when it was kept
    pub kept_message: Option<PathBuf>,
}

enum HandOff {
    Temp(NamedTempFile),
    Kept(PathBuf),
}

impl HandOff {
    fn path(&self) -> &Path {
        match self {
            Self::Temp(file) => file.path(),
            Self::Kept(path) => path,
        }
    }
}

/// Runs scans against a content analyzer.
pub struct Scanner {
    analyzer: Arc<dyn ContentAnalyzer>,
    work_dir: Option<PathBuf>,
    keep_message: bool,
}

impl Scanner {
    /// Create a scanner around an analyzer. Hand-off files go to the system
    /// temp dir and are deleted after each scan.
    #[must_use]
    pub fn new(analyzer: Arc<dyn ContentAnalyzer>) -> Self {
        Self {
            analyzer,
            work_dir: None,
            keep_message: false,
        }
    }

    /// Create a scanner running the configured analyzer command.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            analyzer: Arc::new(CommandAnalyzer::from_config(&config.analyzer)),
            work_dir: config.scan.work_dir.clone(),
            keep_message: config.scan.keep_message,
        })
    }

    /// Set the directory for hand-off files.
    #[must_use]
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    /// Keep hand-off files instead of deleting them.
    #[must_use]
    pub fn with_keep_message(mut self, keep: bool) -> Self {
        self.keep_message = keep;
        self
    }

    /// Compose and expand a message without analyzing it.
    #[must_use]
    pub fn render(&self, header: &str, body: &str) -> String {
        TagEngine::new().expand(&compose_message(header, body))
    }

    /// Render, analyze, parse and classify one message.
    pub async fn scan(&self, header: &str, body: &str) -> Result<ScanOutcome> {
        let id = Uuid::new_v4();
        let rendered = self.render(header, body);
        tracing::info!(
            "Scan {} started with analyzer {} ({} bytes)",
            id,
            self.analyzer.name(),
            rendered.len()
        );

        let hand_off = self.write_hand_off(&rendered).await?;

        let report = match self.analyzer.analyze(hand_off.path()).await {
            Ok(report) => report,
            Err(e) => {
                match &hand_off {
                    HandOff::Kept(path) => tracing::error!(
                        "Scan {} failed: {} (rendered message kept at {})",
                        id,
                        e,
                        path.display()
                    ),
                    HandOff::Temp(_) => tracing::error!("Scan {} failed: {}", id, e),
                }
                return Err(e);
            }
        };

        let parsed = parse_report(&report);
        let verdict = parsed.verdict();
        tracing::info!(
            "Scan {} finished: score {} ({}), {} findings",
            id,
            parsed.score,
            verdict,
            parsed.findings.len()
        );

        let kept_message = match hand_off {
            HandOff::Kept(path) => Some(path),
            HandOff::Temp(_) => None,
        };

        Ok(ScanOutcome {
            id,
            rendered,
            score: parsed.score,
            verdict,
            findings: parsed.findings,
            kept_message,
        })
    }

    async fn write_hand_off(&self, rendered: &str) -> Result<HandOff> {
        let dir = self.work_dir.clone().unwrap_or_else(std::env::temp_dir);
        tokio::fs::create_dir_all(&dir).await?;

        let file = tempfile::Builder::new()
            .prefix("mailprobe-")
            .suffix(".eml")
            .tempfile_in(&dir)?;
        tokio::fs::write(file.path(), rendered).await?;

        if self.keep_message {
            let (_, path) = file.keep().map_err(|e| ScanError::Io(e.error))?;
            tracing::debug!("Keeping rendered message at {}", path.display());
            Ok(HandOff::Kept(path))
        } else {
            Ok(HandOff::Temp(file))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_rejects_empty_command() {
        let mut config = AppConfig::default();
        config.analyzer.command = "  ".to_string();
        assert!(matches!(
            Scanner::from_config(&config),
            Err(ScanError::Config(_))
        ));
    }

    #[test]
    fn test_render_uses_fresh_engine_per_call() {
        let scanner = Scanner::from_config(&AppConfig::default()).expect("default config");
        let first = scanner.render("X-Id: [sr]-[RandomA/24]", "");
        let second = scanner.render("X-Id: [sr]-[RandomA/24]", "");
        assert!(first.starts_with("X-Id: sl"));
        assert_ne!(first, second);
    }
}
