use p4unity_config::AppConfig;
use p4unity_operations::operations::{ValidateOperation, ValidateOutcome};
use p4unity_operations::providers::P4CliProvider;
use p4unity_perforce::P4Client;
use tracing::warn;

use super::ValidateArgs;
use crate::error::{CliError, Result};
use crate::output::{OutputFormatter, PlainTextFormatter};

pub(crate) fn run(args: &ValidateArgs, config: &AppConfig) -> Result<()> {
    let client = P4Client::new(config.p4_executable(), config.connection());

    // One client answers both the describe and every fstat lookup.
    let operation = ValidateOperation::new(
        P4CliProvider::new(client.clone()),
        P4CliProvider::new(client),
        config.policy(),
    );

    let outcome = operation.execute(args.changelist).inspect_err(|e| {
        warn!(changelist = args.changelist, class = ?e.class(), error = %e, "validation aborted");
    })?;

    let formatter = PlainTextFormatter;

    match outcome {
        ValidateOutcome::Bypassed => {
            print!("{}", formatter.format_bypass());
            Ok(())
        }
        ValidateOutcome::Allowed(result) => {
            print!("{}", formatter.format_success(&result));
            Ok(())
        }
        ValidateOutcome::Blocked(result) => {
            print!("{}", formatter.format_failure(&result));
            Err(CliError::ValidationFailed {
                violation_count: result.violations.len(),
            })
        }
    }
}
