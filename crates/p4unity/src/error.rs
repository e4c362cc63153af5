use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error")]
    Config(#[from] p4unity_config::ConfigError),

    #[error("validation could not complete")]
    Operation(#[from] p4unity_operations::OperationError),

    #[error("failed to open log file '{path}'")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    LogInit(String),

    #[error("{violation_count} asset/.meta problem(s) found; fix the changelist and resubmit")]
    ValidationFailed { violation_count: usize },
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::CliError;

    #[test]
    fn validation_failed_reports_count() {
        let err = CliError::ValidationFailed { violation_count: 3 };

        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn operation_error_converts_via_from() {
        let op_err = p4unity_operations::OperationError::ChangelistNotFound(12);

        let cli_err: CliError = op_err.into();

        assert!(matches!(cli_err, CliError::Operation(_)));
    }

    #[test]
    fn operation_error_has_source_chain() {
        let cli_err: CliError = p4unity_operations::OperationError::ChangelistNotFound(12).into();

        let source = std::error::Error::source(&cli_err).expect("source should exist");

        assert!(source.to_string().contains("12"));
    }

    #[test]
    fn log_file_error_includes_path() {
        let err = CliError::LogFile {
            path: PathBuf::from("p4unity_logs/run.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(err.to_string().contains("p4unity_logs/run.txt"));
    }
}
