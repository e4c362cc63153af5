use thiserror::Error;

#[derive(Debug, Error)]
pub enum PerforceError {
    #[error("failed to launch '{program}'")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}:\n{output}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
        output: String,
    },
}
