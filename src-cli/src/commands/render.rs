use crate::cli::TemplateArgs;
use crate::input::{ensure_single_stdin, read_input};
use anyhow::Context;
use mailprobe_template::{compose_message, TagEngine};
use std::process::ExitCode;

/// Read both templates; fails if either cannot be read.
pub fn read_templates(args: &TemplateArgs) -> anyhow::Result<(String, String)> {
    ensure_single_stdin(&[args.header.as_path(), args.body.as_path()])?;
    let header = read_input(&args.header)
        .with_context(|| format!("reading header template {}", args.header.display()))?;
    let body = read_input(&args.body)
        .with_context(|| format!("reading body template {}", args.body.display()))?;
    Ok((header, body))
}

pub fn run(args: &TemplateArgs) -> anyhow::Result<ExitCode> {
    let (header, body) = read_templates(args)?;
    let rendered = TagEngine::new().expand(&compose_message(&header, &body));
    println!("{rendered}");
    Ok(ExitCode::SUCCESS)
}
