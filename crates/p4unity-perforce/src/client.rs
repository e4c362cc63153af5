use std::process::{Command, ExitStatus};

use tracing::{debug, info};

use crate::fstat::FstatResult;
use crate::{PerforceError, Result};

pub const DEFAULT_EXECUTABLE: &str = "p4";

const NO_SUCH_CHANGELIST: &str = "no such changelist";

/// Server connection values passed as global `p4` flags.
///
/// Empty values are left off the command line so `p4` falls back to
/// `P4PORT`, `P4USER` and `P4PASSWD` from its own environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub server: String,
    pub user: String,
    pub password: String,
}

/// Runs `p4` commands in tagged (`-s`) output mode.
#[derive(Debug, Clone)]
pub struct P4Client {
    executable: String,
    connection: ConnectionSettings,
}

impl P4Client {
    #[must_use]
    pub fn new(executable: impl Into<String>, connection: ConnectionSettings) -> Self {
        Self {
            executable: executable.into(),
            connection,
        }
    }

    #[must_use]
    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Fetches `p4 -s describe -s <changelist>`.
    ///
    /// Output that reports a missing changelist is returned as-is so the caller can
    /// tell it apart from a failed command.
    ///
    /// # Errors
    ///
    /// Returns an error if `p4` cannot be launched or exits unsuccessfully for any
    /// other reason.
    pub fn describe(&self, changelist: u32) -> Result<String> {
        let changelist = changelist.to_string();
        let args = ["describe", "-s", changelist.as_str()];
        let output = self.run(&args)?;
        info!(changelist = %changelist, output = %output.text, "p4-describe");

        if !output.status.success() && !output.text.contains(NO_SUCH_CHANGELIST) {
            return Err(self.command_failed(&args, output));
        }
        Ok(output.text)
    }

    /// Queries `p4 -s fstat <depot_path>`.
    ///
    /// # Errors
    ///
    /// Returns an error if `p4` cannot be launched, or exits unsuccessfully without
    /// reporting the file as unknown.
    pub fn fstat(&self, depot_path: &str) -> Result<FstatResult> {
        let args = ["fstat", depot_path];
        let output = self.run(&args)?;
        info!(path = depot_path, out = %output.text, "fstat");

        if !output.status.success() && !FstatResult::reports_no_files(&output.text) {
            return Err(self.command_failed(&args, output));
        }
        Ok(FstatResult::parse(&output.text))
    }

    fn global_args(&self) -> Vec<&str> {
        let mut args = Vec::new();
        for (flag, value) in [
            ("-p", &self.connection.server),
            ("-u", &self.connection.user),
            ("-P", &self.connection.password),
        ] {
            if !value.is_empty() {
                args.push(flag);
                args.push(value.as_str());
            }
        }
        args.push("-s");
        args
    }

    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        debug!(program = %self.executable, args = ?args, "running p4");

        let output = Command::new(&self.executable)
            .args(self.global_args())
            .args(args)
            .output()
            .map_err(|source| PerforceError::Launch {
                program: self.executable.clone(),
                source,
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            status: output.status,
            text,
        })
    }

    fn command_failed(&self, args: &[&str], output: CommandOutput) -> PerforceError {
        PerforceError::CommandFailed {
            command: format!("{} {}", self.executable, args.join(" ")),
            status: output.status,
            output: output.text,
        }
    }
}

struct CommandOutput {
    status: ExitStatus,
    text: String,
}
