use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::traits::{ChangelistProvider, DepotOracle};
use crate::{OperationError, Result};

/// Changelists without a report answer the way the server does for unknown changes.
pub struct MockChangelistProvider {
    reports: HashMap<u32, String>,
    describe_calls: Mutex<Vec<u32>>,
}

impl MockChangelistProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            reports: HashMap::new(),
            describe_calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_report(mut self, changelist: u32, raw: &str) -> Self {
        self.reports.insert(changelist, raw.to_string());
        self
    }

    #[must_use]
    pub fn describe_calls(&self) -> Vec<u32> {
        self.describe_calls.lock().expect("mutex poisoned").clone()
    }
}

impl Default for MockChangelistProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelistProvider for MockChangelistProvider {
    fn describe_changelist(&self, changelist: u32) -> Result<String> {
        self.describe_calls
            .lock()
            .expect("mutex poisoned")
            .push(changelist);
        Ok(self.reports.get(&changelist).cloned().unwrap_or_else(|| {
            format!("error: Change {changelist} unknown - no such changelist.\r\nexit: 1\r\n")
        }))
    }
}

/// Depot state keyed by path; anything not listed does not exist.
pub struct MockDepotOracle {
    existing: HashSet<String>,
    failing: HashSet<String>,
    queries: Mutex<Vec<String>>,
}

impl MockDepotOracle {
    #[must_use]
    pub fn new() -> Self {
        Self {
            existing: HashSet::new(),
            failing: HashSet::new(),
            queries: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_existing(mut self, path: &str) -> Self {
        self.existing.insert(path.to_string());
        self
    }

    #[must_use]
    pub fn failing_on(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }

    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("mutex poisoned").clone()
    }
}

impl Default for MockDepotOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl DepotOracle for MockDepotOracle {
    fn exists_in_depot(&self, depot_path: &str) -> Result<bool> {
        self.queries
            .lock()
            .expect("mutex poisoned")
            .push(depot_path.to_string());
        if self.failing.contains(depot_path) {
            return Err(OperationError::Perforce(
                p4unity_perforce::PerforceError::Launch {
                    program: "p4".to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock failure"),
                },
            ));
        }
        Ok(self.existing.contains(depot_path))
    }
}
