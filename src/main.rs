mod analyze;
mod cli;
mod config;
mod error;
mod report;
mod scan;
mod types;

use crate::error::EvalError;
use crate::types::config::ReportFormatSetting;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    // Logs go to stderr so the report on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();
}

fn run() -> Result<i32, EvalError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let loaded = config::load_config(cli.config.as_deref())?;
    let output_format = match cli.format {
        Some(cli::ReportFormat::Text) => report::OutputFormat::Text,
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match loaded.report.format {
            ReportFormatSetting::Text => report::OutputFormat::Text,
            ReportFormatSetting::Json => report::OutputFormat::Json,
            ReportFormatSetting::Md => report::OutputFormat::Md,
        },
    };

    let today = chrono::Local::now().date_naive();
    let evaluation = analyze::evaluate(&cli.repo_path, &loaded.git.settings(), today);
    if evaluation.is_invalid() {
        tracing::warn!(path = %cli.repo_path.display(), "repository path does not exist");
    }

    let rendered = report::render(&evaluation, output_format)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
