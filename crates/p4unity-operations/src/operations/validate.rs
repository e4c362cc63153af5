use p4unity_core::{FileRecord, ValidationPolicy, Verdict};
use p4unity_parse::ChangelistReport;
use tracing::{debug, info};

use crate::classification::Classification;
use crate::policy::PolicyFilter;
use crate::traits::{ChangelistProvider, DepotOracle};
use crate::verification::rules::{AddPairingRule, DeletePairingRule};
use crate::verification::{
    SkippedFile, VerificationContext, VerificationEngine, VerificationResult,
};
use crate::{OperationError, Result};

#[derive(Debug)]
pub enum ValidateOutcome {
    /// The commit message carried the bypass key-phrase; nothing was checked.
    Bypassed,
    Allowed(VerificationResult),
    Blocked(VerificationResult),
}

impl ValidateOutcome {
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        match self {
            Self::Bypassed => Verdict::allowed(),
            Self::Allowed(result) | Self::Blocked(result) => result.verdict(),
        }
    }

    #[must_use]
    pub fn is_allowed(&self) -> bool {
        !matches!(self, Self::Blocked(_))
    }
}

pub struct ValidateOperation<C, O> {
    changelist_provider: C,
    oracle: O,
    policy: ValidationPolicy,
}

impl<C, O> ValidateOperation<C, O>
where
    C: ChangelistProvider,
    O: DepotOracle,
{
    pub fn new(changelist_provider: C, oracle: O, policy: ValidationPolicy) -> Self {
        Self {
            changelist_provider,
            oracle,
            policy,
        }
    }

    /// Fetches the changelist description and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the changelist cannot be fetched or any step of
    /// [`Self::validate_report`] fails.
    pub fn execute(&self, changelist: u32) -> Result<ValidateOutcome> {
        let raw = self
            .changelist_provider
            .describe_changelist(changelist)
            .map_err(|source| OperationError::ChangelistFetch {
                changelist,
                source: Box::new(source),
            })?;
        self.validate_report(changelist, &raw)
    }

    /// Validates raw tagged `describe` output.
    ///
    /// # Errors
    ///
    /// Returns an error if the changelist does not exist, either block of the report
    /// is empty, a file line is malformed, or a depot lookup fails.
    pub fn validate_report(&self, changelist: u32, raw: &str) -> Result<ValidateOutcome> {
        if ChangelistReport::reports_missing_changelist(raw) {
            return Err(OperationError::ChangelistNotFound(changelist));
        }

        let report = ChangelistReport::parse(raw);
        info!(
            header_lines = report.header.len(),
            file_count = report.file_lines.len(),
            "filtering"
        );

        if report.header.is_empty() {
            return Err(OperationError::EmptyHeader { changelist });
        }

        if report
            .message_lines()
            .any(|line| self.policy.is_bypassed_by(line))
        {
            info!(changelist, "bypassed");
            return Ok(ValidateOutcome::Bypassed);
        }

        if report.file_lines.is_empty() {
            return Err(OperationError::NoFileRecords { changelist });
        }

        let records = report.records()?;
        let context = build_context(&self.policy, &records);

        let add_rule = AddPairingRule::new(&self.oracle);
        let delete_rule = DeletePairingRule::new(&self.oracle);

        let mut engine = VerificationEngine::new();
        engine.add_rule(&add_rule);
        engine.add_rule(&delete_rule);

        let result = engine.verify(&context)?;

        if result.is_success() {
            Ok(ValidateOutcome::Allowed(result))
        } else {
            Ok(ValidateOutcome::Blocked(result))
        }
    }
}

/// Filters `records` through `policy` and classifies the survivors.
#[must_use]
pub fn build_context(policy: &ValidationPolicy, records: &[FileRecord]) -> VerificationContext {
    let filter = PolicyFilter::new(policy);
    let mut classification = Classification::default();
    let mut skipped_files = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let decision = filter.decide(&record.path);
        debug!(
            index,
            path = %record.path,
            revision = record.revision,
            operation = %record.operation,
            decision = decision.label(),
            "Candidate"
        );

        if decision.is_accepted() {
            classification.insert(record);
        } else {
            skipped_files.push(SkippedFile {
                path: record.path.clone(),
                reason: decision,
            });
        }
    }

    VerificationContext {
        classification,
        skipped_files,
    }
}
