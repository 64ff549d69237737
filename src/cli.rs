use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "repo-eval",
    version,
    about = "Heuristic quality triage for local git repositories",
    after_help = "Configuration precedence (lowest to highest): built-in defaults, \
~/.config/repo-eval/config.toml, the --config file, command-line flags. \
Environment variables only affect log filtering (RUST_LOG)."
)]
pub struct Cli {
    /// Path to the repository to evaluate
    #[arg(long)]
    pub repo_path: PathBuf,

    /// Output format (defaults to the configured format, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// TOML config file; its keys override ~/.config/repo-eval/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}
