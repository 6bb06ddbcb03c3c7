use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "mailprobe",
    version,
    about = "Render templated test messages and score them with a content analyzer"
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "MAILPROBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Expand the templates and print the rendered message
    Render(TemplateArgs),
    /// Render the templates, run the analyzer and print the verdict
    Scan(ScanArgs),
    /// Rewrite a header/body pair into the reference layout
    Fix(FixArgs),
    /// Parse an existing analyzer report
    Report(ReportArgs),
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Header template file (`-` for stdin)
    #[arg(long)]
    pub header: PathBuf,

    /// Body template file (`-` for stdin)
    #[arg(long)]
    pub body: PathBuf,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub templates: TemplateArgs,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Keep the rendered message file after the scan
    #[arg(long)]
    pub keep_message: bool,
}

#[derive(Debug, Args)]
pub struct FixArgs {
    #[command(flatten)]
    pub templates: TemplateArgs,

    /// Write the fixed header here instead of stdout
    #[arg(long)]
    pub out_header: Option<PathBuf>,

    /// Write the fixed body here instead of stdout
    #[arg(long)]
    pub out_body: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Report file (`-` for stdin)
    pub file: PathBuf,

    /// Print the parsed report as JSON
    #[arg(long)]
    pub json: bool,
}
