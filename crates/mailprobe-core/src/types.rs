//! Shared types used across Mailprobe.
//!
//! The report parser produces [`Severity`] values and the scanner attaches a
//! [`Verdict`]; both cross crate boundaries and are serialized for the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score at or above which a message is considered blocked.
pub const BLOCKED_THRESHOLD: f64 = 5.0;

/// Score at or above which a message needs attention.
pub const ATTENTION_THRESHOLD: f64 = 0.1;

/// Severity attached to a single analyzer finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational, contributes little or negatively
    Info,
    /// Contributes at least one point to the score
    Warning,
    /// Known to be fatal for deliverability regardless of its points
    Critical,
}

impl Severity {
    /// Get the string representation of the severity.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-level outcome derived from an analyzer score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Score below the attention threshold
    Safe,
    /// Score in `[0.1, 5.0)`
    Attention,
    /// Score of 5.0 or more
    Blocked,
}

impl Verdict {
    /// Classify a score. Lower bounds are inclusive.
    ///
    /// ```rust
    /// use mailprobe_core::Verdict;
    ///
    /// assert_eq!(Verdict::classify(5.0), Verdict::Blocked);
    /// assert_eq!(Verdict::classify(4.999), Verdict::Attention);
    /// assert_eq!(Verdict::classify(0.0), Verdict::Safe);
    /// ```
    #[must_use]
    pub fn classify(score: f64) -> Self {
        if score >= BLOCKED_THRESHOLD {
            Self::Blocked
        } else if score >= ATTENTION_THRESHOLD {
            Self::Attention
        } else {
            Self::Safe
        }
    }

    /// Get the string representation of the verdict.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Attention => "ATTENTION",
            Self::Blocked => "BLOCKED",
        }
    }

    /// Display colour used when presenting the verdict.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Self::Safe => "green",
            Self::Attention => "orange",
            Self::Blocked => "red",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
