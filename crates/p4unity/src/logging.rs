use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, Result};

/// Created next to the server binary when `p4d` runs the trigger.
pub(crate) const LOG_DIR: &str = "p4unity_logs";

const FILTER_ENV: &str = "P4UNITY_LOG";
const DEFAULT_FILTER: &str = "debug";

/// Writes JSON events for this invocation to a new file under `dir`.
///
/// There is no rotation or expiry; every run leaves one file behind.
pub(crate) fn init_file_logging(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| CliError::LogFile {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(log_file_name());
    let file = File::create(&path).map_err(|source| CliError::LogFile {
        path: path.clone(),
        source,
    })?;

    let filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| CliError::LogInit(e.to_string()))?;

    Ok(path)
}

fn log_file_name() -> String {
    format!(
        "{}-{}.txt",
        Utc::now().format("%Y%m%dT%H%M%S%.3fZ"),
        std::process::id()
    )
}
