//! Analyzer report parsing.
//!
//! The analyzer prints a free-text report. Two things are read from it: the
//! overall score from the `Content analysis details:` line, and one
//! [`Finding`] per rule line of the form `<points> <RULE_NAME> <description>`.

use mailprobe_core::{Severity, Verdict};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Rules that are fatal for deliverability whatever their points.
pub const CRITICAL_RULES: [&str; 2] = ["INVALID_DATE", "MSGID_FROM_MTA_HEADER"];

/// Points at or above which a non-critical rule becomes a warning.
pub const WARNING_POINTS: f64 = 1.0;

static SCORE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Content analysis details:\s+\(([\d.-]+) points").expect("valid score regex")
});

static RULE_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(-?\d+\.?\d*)\s+([A-Z0-9_]+)\s+(.*)$").expect("valid rule line regex")
});

/// One classified rule hit from the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Contribution to the total score (may be negative)
    pub points: f64,
    /// Rule identifier, uppercase with digits and underscores
    pub rule: String,
    /// Rule description, trimmed
    pub description: String,
    /// Severity derived from the rule and its points
    pub severity: Severity,
}

/// Score and findings read from one report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedReport {
    /// Total score, `0.0` when the report has none
    pub score: f64,
    /// Findings in the order their lines appear
    pub findings: Vec<Finding>,
}

impl ParsedReport {
    /// Verdict for the parsed score.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        Verdict::classify(self.score)
    }

    /// Number of findings with the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }
}

/// Classify a rule hit. Named critical rules win over the points threshold.
#[must_use]
pub fn classify_finding(rule: &str, points: f64) -> Severity {
    if CRITICAL_RULES.contains(&rule) {
        Severity::Critical
    } else if points >= WARNING_POINTS {
        Severity::Warning
    } else {
        Severity::Info
    }
}

/// Parse a report. Never fails: missing or malformed parts yield defaults.
#[must_use]
pub fn parse_report(report_text: &str) -> ParsedReport {
    if report_text.is_empty() {
        return ParsedReport::default();
    }

    let score = extract_score(report_text).unwrap_or(0.0);
    let findings: Vec<Finding> = report_text.lines().filter_map(parse_rule_line).collect();

    tracing::debug!(
        score,
        findings = findings.len(),
        report_len = report_text.len(),
        "Parsed analyzer report"
    );

    ParsedReport { score, findings }
}

fn extract_score(text: &str) -> Option<f64> {
    let raw = SCORE_REGEX.captures(text)?.get(1)?.as_str();
    raw.parse().ok()
}

fn parse_rule_line(line: &str) -> Option<Finding> {
    let caps = RULE_LINE_REGEX.captures(line)?;
    let points: f64 = caps[1].parse().ok()?;
    let rule = caps[2].to_string();
    let severity = classify_finding(&rule, points);

    Some(Finding {
        points,
        description: caps[3].trim().to_string(),
        rule,
        severity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        assert_eq!(parse_report(""), ParsedReport::default());
        assert_eq!(parse_report("").score, 0.0);
    }

    #[test]
    fn test_score_extraction() {
        let report = parse_report("Content analysis details:  (7.3 points, 5.0 required)");
        assert!((report.score - 7.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_score() {
        let report = parse_report("Content analysis details:   (-1.9 points, 5.0 required)");
        assert!((report.score + 1.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_score_wins() {
        let text = "Content analysis details:   (2.0 points, 5.0 required)\n\
                    Content analysis details:   (9.0 points, 5.0 required)";
        assert!((parse_report(text).score - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unparsable_score_defaults_to_zero() {
        let report = parse_report("Content analysis details:   (1.2.3 points, 5.0 required)");
        assert_eq!(report.score, 0.0);
    }

    #[test]
    fn test_missing_score_defaults_to_zero() {
        let report = parse_report(" 1.5 SOME_RULE something");
        assert_eq!(report.score, 0.0);
        assert_eq!(report.findings.len(), 1);
    }

    #[test]
    fn test_critical_rule_overrides_points() {
        let report = parse_report("2.5 INVALID_DATE Message has invalid date");
        assert_eq!(report.findings.len(), 1);
        let finding = &report.findings[0];
        assert_eq!(finding.rule, "INVALID_DATE");
        assert_eq!(finding.description, "Message has invalid date");
        assert_eq!(finding.severity, Severity::Critical);
    }

    #[test]
    fn test_critical_rule_with_low_points() {
        let report = parse_report("0.0 MSGID_FROM_MTA_HEADER Message-Id was added by a relay");
        assert_eq!(report.findings[0].severity, Severity::Critical);
    }

    #[test]
    fn test_info_and_warning_thresholds() {
        assert_eq!(classify_finding("SOME_RULE", 0.5), Severity::Info);
        assert_eq!(classify_finding("SOME_RULE", 0.999), Severity::Info);
        assert_eq!(classify_finding("SOME_RULE", 1.0), Severity::Warning);
        assert_eq!(classify_finding("SOME_RULE", -5.0), Severity::Info);
        assert_eq!(classify_finding("INVALID_DATE_X", 0.2), Severity::Info);

        let report = parse_report("0.5 SOME_RULE minor issue");
        assert_eq!(report.findings[0].severity, Severity::Info);
    }

    #[test]
    fn test_non_matching_lines_are_ignored() {
        let text = " pts rule name              description\n\
                    ---- ---------------------- --------------------------------\n\
                    1.0 lowercase_rule not a rule\n\
                    abc RULE text\n\
                    1.0 RULE_WITHOUT_DESCRIPTION\n\
                                                some wrapped description text";
        assert!(parse_report(text).findings.is_empty());
    }

    #[test]
    fn test_description_is_trimmed() {
        let report = parse_report("  -0.1 DKIM_VALID   Message has a valid signature   ");
        let finding = &report.findings[0];
        assert!((finding.points + 0.1).abs() < f64::EPSILON);
        assert_eq!(finding.rule, "DKIM_VALID");
        assert_eq!(finding.description, "Message has a valid signature");
    }

    #[test]
    fn test_verdict_and_counts() {
        let text = "Content analysis details:   (5.5 points, 5.0 required)\n\
                    2.5 INVALID_DATE Invalid Date: header\n\
                    3.0 MISSING_MID Missing Message-Id: header\n\
                    0.0 HTML_MESSAGE BODY: HTML included in message";
        let report = parse_report(text);

        assert_eq!(report.verdict(), Verdict::Blocked);
        assert_eq!(report.count(Severity::Critical), 1);
        assert_eq!(report.count(Severity::Warning), 1);
        assert_eq!(report.count(Severity::Info), 1);
    }
}
