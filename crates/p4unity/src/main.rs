mod commands;
mod error;
mod logging;
mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use p4unity_config::{AppConfig, DEFAULT_CONFIG_FILE};
use tracing::info;

use crate::commands::ValidateArgs;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "p4unity", version)]
#[command(
    about = "Perforce change-content trigger that keeps Unity assets and .meta files together",
    long_about = None
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long = "config", short = 'c', default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(flatten)]
    validate: ValidateArgs,
}

fn main() -> ExitCode {
    let started = Instant::now();
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            print_error(&e.into());
            return ExitCode::FAILURE;
        }
    };

    if config.verbose_logs() {
        match logging::init_file_logging(Path::new(logging::LOG_DIR)) {
            Ok(path) => info!(path = %path.display(), "logging to file"),
            Err(e) => {
                print_error(&e);
                return ExitCode::FAILURE;
            }
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    info!(args = ?args, "Boot");

    let result = commands::validate::run(&cli.validate, &config);

    info!(elapsed = ?started.elapsed(), "Performance");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

// p4d only relays a trigger's stdout to the submitting client.
fn print_error(error: &CliError) {
    println!("[p4unity] error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        println!("[p4unity] caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
