use p4unity_core::{Verdict, Violation};

use super::SkippedFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub added_count: usize,
    pub deleted_count: usize,
    pub violations: Vec<Violation>,
    pub skipped_files: Vec<SkippedFile>,
}

impl VerificationResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        Verdict::from_violations(self.violations.clone())
    }
}
