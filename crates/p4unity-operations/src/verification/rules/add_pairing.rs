use p4unity_core::{META_SUFFIX, Violation, extension, strip_meta};
use tracing::{debug, info};

use super::{VerificationContext, VerificationResult, VerificationRule, lookup};
use crate::Result;
use crate::traits::DepotOracle;

/// Every added asset needs its `.meta`, and every added `.meta` needs its asset,
/// either in the same changelist or already in the depot.
pub struct AddPairingRule<'a, O: DepotOracle> {
    oracle: &'a O,
}

impl<'a, O: DepotOracle> AddPairingRule<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self { oracle }
    }

    fn partner_present(&self, context: &VerificationContext, partner: &str) -> Result<bool> {
        if context.classification.added.contains(partner) {
            return Ok(true);
        }
        lookup(self.oracle, partner)
    }
}

impl<O: DepotOracle> VerificationRule for AddPairingRule<'_, O> {
    fn check(&self, context: &VerificationContext, result: &mut VerificationResult) -> Result<()> {
        let added = &context.classification.added;
        info!(count = added.len(), "Checking ADD list");

        for path in added.iter() {
            if let Some(asset) = strip_meta(path) {
                // Directories have no depot entry of their own to pair with.
                if extension(asset).is_none_or(|ext| ext.trim().is_empty()) {
                    debug!(path, "directory meta");
                    continue;
                }
                if !self.partner_present(context, asset)? {
                    result.violations.push(Violation::MissingAsset {
                        meta: path.to_string(),
                    });
                }
            } else {
                let meta = format!("{path}{META_SUFFIX}");
                if !self.partner_present(context, &meta)? {
                    result.violations.push(Violation::MissingMeta {
                        asset: path.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
