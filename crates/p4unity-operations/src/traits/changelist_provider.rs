use crate::Result;

pub trait ChangelistProvider: Send + Sync {
    /// Returns the raw tagged `describe` output for `changelist`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be queried.
    fn describe_changelist(&self, changelist: u32) -> Result<String>;
}
