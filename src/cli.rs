use clap::Parser;
use license_bouncer::application::dto::FormatOption;
use std::path::PathBuf;

/// Render dependency license evaluation results as text, CSV or JSON
#[derive(Parser, Debug)]
#[command(name = "license-bouncer")]
#[command(version)]
#[command(about = "Render dependency license evaluation results as text, CSV or JSON", long_about = None)]
pub struct Args {
    /// License results document (JSON array). Use '-' or omit to read stdin
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<String>,

    /// Output format: text, csv or json [default: text]
    #[arg(short, long)]
    pub format: Option<FormatOption>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to ./license-bouncer.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when any result is denied
    #[arg(long)]
    pub fail_on_denied: bool,

    /// Suppress progress messages on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
