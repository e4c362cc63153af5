use p4unity_perforce::{FstatResult, P4Client};
use tracing::info;

use crate::Result;
use crate::traits::{ChangelistProvider, DepotOracle};

/// Talks to the server through the `p4` command-line client.
pub struct P4CliProvider {
    client: P4Client,
}

impl P4CliProvider {
    #[must_use]
    pub fn new(client: P4Client) -> Self {
        Self { client }
    }
}

impl ChangelistProvider for P4CliProvider {
    fn describe_changelist(&self, changelist: u32) -> Result<String> {
        Ok(self.client.describe(changelist)?)
    }
}

impl DepotOracle for P4CliProvider {
    fn exists_in_depot(&self, depot_path: &str) -> Result<bool> {
        let result = self.client.fstat(depot_path)?;
        match &result {
            FstatResult::NotFound | FstatResult::NoHeadAction => {
                info!(path = depot_path, "fstat found no head action");
            }
            FstatResult::HeadAction(op) if !op.is_exists_like() => {
                info!(path = depot_path, ignored_action = %op, "fstat");
            }
            FstatResult::HeadAction(_) => {}
        }
        Ok(result.exists_like())
    }
}
