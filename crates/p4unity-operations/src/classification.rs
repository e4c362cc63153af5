use std::collections::HashSet;

use indexmap::IndexSet;
use p4unity_core::FileRecord;
use tracing::debug;

/// Depot paths with an exact-case view and a lower-cased mirror for case-insensitive lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet {
    exact: IndexSet<String>,
    lower: HashSet<String>,
}

impl PathSet {
    pub fn insert(&mut self, path: &str) {
        self.exact.insert(path.to_string());
        self.lower.insert(path.to_lowercase());
    }

    #[must_use]
    pub fn contains_exact(&self, path: &str) -> bool {
        self.exact.contains(path)
    }

    #[must_use]
    pub fn contains_ignoring_case(&self, path: &str) -> bool {
        self.lower.contains(&path.to_lowercase())
    }

    /// Exact match first, then the lower-cased mirror.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.contains_exact(path) || self.contains_ignoring_case(path)
    }

    /// Paths in the order they were first inserted.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.exact.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

/// Files of one changelist grouped by whether they are being added or deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub added: PathSet,
    pub deleted: PathSet,
}

impl Classification {
    /// Records whose operation is neither add-like nor delete-like are left out.
    pub fn classify<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a FileRecord>,
    {
        let mut classification = Self::default();
        for record in records {
            classification.insert(record);
        }
        classification
    }

    pub fn insert(&mut self, record: &FileRecord) {
        if record.operation.is_add_like() {
            debug!(path = %record.path, operation = %record.operation, "MarkedForAdd");
            self.added.insert(&record.path);
        }
        if record.operation.is_delete_like() {
            debug!(path = %record.path, operation = %record.operation, "MarkedForDelete");
            self.deleted.insert(&record.path);
        }
    }
}
