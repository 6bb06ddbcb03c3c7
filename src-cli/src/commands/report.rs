use crate::cli::ReportArgs;
use crate::input::read_input;
use crate::output::{findings_table, to_json, verdict_line};
use anyhow::Context;
use mailprobe_report::parse_report;
use std::process::ExitCode;

pub fn run(args: &ReportArgs) -> anyhow::Result<ExitCode> {
    let text = read_input(&args.file)
        .with_context(|| format!("reading report {}", args.file.display()))?;
    let report = parse_report(&text);

    if args.json {
        let value = serde_json::json!({
            "score": report.score,
            "verdict": report.verdict(),
            "findings": report.findings,
        });
        println!("{}", to_json(&value)?);
    } else {
        println!("{}", verdict_line(report.verdict(), report.score));
        println!();
        print!("{}", findings_table(&report.findings));
    }

    Ok(ExitCode::SUCCESS)
}
