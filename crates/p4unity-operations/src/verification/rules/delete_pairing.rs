use p4unity_core::{META_SUFFIX, Violation, is_meta};
use tracing::info;

use super::{VerificationContext, VerificationResult, VerificationRule, lookup};
use crate::Result;
use crate::traits::DepotOracle;

/// A deleted asset must not leave its `.meta` behind in the depot.
///
/// A `.meta` deleted on its own is not checked.
pub struct DeletePairingRule<'a, O: DepotOracle> {
    oracle: &'a O,
}

impl<'a, O: DepotOracle> DeletePairingRule<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self { oracle }
    }
}

impl<O: DepotOracle> VerificationRule for DeletePairingRule<'_, O> {
    fn check(&self, context: &VerificationContext, result: &mut VerificationResult) -> Result<()> {
        let deleted = &context.classification.deleted;
        info!(count = deleted.len(), "Checking DEL list");

        for path in deleted.iter().filter(|path| !is_meta(path)) {
            let meta = format!("{path}{META_SUFFIX}");
            if deleted.contains(&meta) {
                continue;
            }
            // Already gone from the depot means an earlier change tidied it up.
            if lookup(self.oracle, &meta)? {
                result.violations.push(Violation::OrphanedMeta {
                    asset: path.to_string(),
                });
            }
        }

        Ok(())
    }
}
