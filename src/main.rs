use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitbcalc::cli::{execute, Cli, DEFAULT_LOG_FILTER, LOG_ENV_VAR};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.log_filter() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match execute(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
