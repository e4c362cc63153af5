use super::rules::VerificationRule;
use super::{VerificationContext, VerificationResult};
use crate::Result;

pub struct VerificationEngine<'a> {
    rules: Vec<&'a dyn VerificationRule>,
}

impl<'a> VerificationEngine<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: &'a dyn VerificationRule) {
        self.rules.push(rule);
    }

    /// Runs every rule in insertion order, accumulating their violations.
    ///
    /// # Errors
    ///
    /// Returns the first error any rule raises; no partial result is produced.
    pub fn verify(&self, context: &VerificationContext) -> Result<VerificationResult> {
        let mut result = VerificationResult {
            added_count: context.classification.added.len(),
            deleted_count: context.classification.deleted.len(),
            violations: Vec::new(),
            skipped_files: context.skipped_files.clone(),
        };

        for rule in &self.rules {
            rule.check(context, &mut result)?;
        }

        Ok(result)
    }
}

impl Default for VerificationEngine<'_> {
    fn default() -> Self {
        Self::new()
    }
}
