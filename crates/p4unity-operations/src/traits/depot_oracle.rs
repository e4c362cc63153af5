use crate::Result;

/// Answers questions about the depot state that a changelist alone cannot.
pub trait DepotOracle: Send + Sync {
    /// True when `depot_path` exists at its head revision with an add, edit,
    /// import or move/add action.
    ///
    /// # Errors
    ///
    /// Returns an error if no definite answer could be obtained.
    fn exists_in_depot(&self, depot_path: &str) -> Result<bool>;
}
