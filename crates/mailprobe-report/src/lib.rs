//! Mailprobe Report - turns analyzer output into a score and findings.
//!
//! # Example
//!
//! ```rust
//! use mailprobe_report::{parse_report, Severity, Verdict};
//!
//! let report = parse_report(
//!     "Content analysis details:   (2.5 points, 5.0 required)\n\
//!      2.5 INVALID_DATE Invalid Date: header (not RFC 2822)",
//! );
//! assert_eq!(report.verdict(), Verdict::Attention);
//! assert_eq!(report.findings[0].severity, Severity::Critical);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod parser;

pub use mailprobe_core::{Severity, Verdict};
pub use parser::{
    classify_finding, parse_report, Finding, ParsedReport, CRITICAL_RULES, WARNING_POINTS,
};

/// Classify a score into a verdict.
///
/// Thin wrapper over [`Verdict::classify`].
#[must_use]
pub fn classify(score: f64) -> Verdict {
    Verdict::classify(score)
}
