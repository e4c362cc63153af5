use crate::classification::Classification;
use crate::policy::FilterDecision;

/// A file left out of validation by the path policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: String,
    pub reason: FilterDecision,
}

pub struct VerificationContext {
    pub classification: Classification,
    pub skipped_files: Vec<SkippedFile>,
}
