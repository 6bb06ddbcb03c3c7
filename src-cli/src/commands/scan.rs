use super::render::read_templates;
use super::EXIT_BLOCKED;
use crate::cli::ScanArgs;
use crate::output::{findings_table, to_json, verdict_line};
use mailprobe_core::{AppConfig, Verdict};
use mailprobe_scanner::Scanner;
use std::process::ExitCode;

pub async fn run(args: &ScanArgs, config: &AppConfig) -> anyhow::Result<ExitCode> {
    let (header, body) = read_templates(&args.templates)?;

    let mut scanner = Scanner::from_config(config)?;
    if args.keep_message {
        scanner = scanner.with_keep_message(true);
    }

    let outcome = scanner.scan(&header, &body).await?;

    if args.json {
        println!("{}", to_json(&outcome)?);
    } else {
        println!("{}", verdict_line(outcome.verdict, outcome.score));
        println!();
        print!("{}", findings_table(&outcome.findings));
        if let Some(path) = &outcome.kept_message {
            println!();
            println!("Rendered message kept at {}", path.display());
        }
    }

    Ok(if outcome.verdict == Verdict::Blocked {
        ExitCode::from(EXIT_BLOCKED)
    } else {
        ExitCode::SUCCESS
    })
}
