mod add_pairing;
mod delete_pairing;

pub use add_pairing::AddPairingRule;
pub use delete_pairing::DeletePairingRule;

use super::{VerificationContext, VerificationResult};
use crate::traits::DepotOracle;
use crate::{OperationError, Result};

pub trait VerificationRule {
    /// # Errors
    ///
    /// Returns an error if the rule check cannot be completed.
    fn check(&self, context: &VerificationContext, result: &mut VerificationResult) -> Result<()>;
}

fn lookup<O: DepotOracle>(oracle: &O, depot_path: &str) -> Result<bool> {
    oracle
        .exists_in_depot(depot_path)
        .map_err(|source| OperationError::OracleFailed {
            path: depot_path.to_string(),
            source: Box::new(source),
        })
}
