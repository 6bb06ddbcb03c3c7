//! Human-readable and JSON rendering of results.

use mailprobe_core::Verdict;
use mailprobe_report::Finding;
use serde::Serialize;
use std::fmt::Write;

/// Serialize a value as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One-line verdict summary, e.g. `ATTENTION (orange): 3.4 points`.
pub fn verdict_line(verdict: Verdict, score: f64) -> String {
    format!("{verdict} ({}): {score:.1} points", verdict.color())
}

/// Findings as an aligned table, in report order.
pub fn findings_table(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return "No findings.\n".to_string();
    }

    let rule_width = findings
        .iter()
        .map(|f| f.rule.len())
        .max()
        .unwrap_or(0)
        .max("RULE".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:>6}  {:<8}  {:<rule_width$}  DESCRIPTION", "PTS", "SEVERITY", "RULE");
    for f in findings {
        let _ = writeln!(
            out,
            "{:>6.1}  {:<8}  {:<rule_width$}  {}",
            f.points,
            f.severity.as_str(),
            f.rule,
            f.description
        );
    }
    out
}
