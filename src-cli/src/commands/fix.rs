use super::render::read_templates;
use crate::cli::FixArgs;
use anyhow::Context;
use mailprobe_core::AppConfig;
use mailprobe_template::fix_template;
use std::path::Path;
use std::process::ExitCode;

pub fn run(args: &FixArgs, config: &AppConfig) -> anyhow::Result<ExitCode> {
    let (header, body) = read_templates(&args.templates)?;
    let fixed = fix_template(&header, &body, &config.reference);

    emit(args.out_header.as_deref(), &fixed.header, "header")?;
    emit(args.out_body.as_deref(), &fixed.body, "body")?;
    eprintln!("{}", fixed.note);

    Ok(ExitCode::SUCCESS)
}

fn emit(target: Option<&Path>, contents: &str, label: &str) -> anyhow::Result<()> {
    match target {
        Some(path) => std::fs::write(path, contents)
            .with_context(|| format!("writing fixed {label} to {}", path.display())),
        None => {
            println!("{contents}");
            println!();
            Ok(())
        }
    }
}
