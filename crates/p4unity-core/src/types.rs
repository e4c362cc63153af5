use std::fmt;

/// Semantic grouping of Perforce file operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationCategory {
    /// Creates, imports or moves a file into place.
    AddLike,
    /// Removes, purges, archives or moves a file away.
    DeleteLike,
    /// Leaves the file present in the depot at its head revision.
    ExistsLike,
}

/// A Perforce file action as reported by `describe` and `fstat`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Edit,
    Delete,
    Branch,
    Integrate,
    Import,
    Purge,
    Archive,
    MoveAdd,
    MoveDelete,
    Other(String),
}

impl Operation {
    /// Matches the raw action word case-sensitively; unknown words are kept as [`Operation::Other`].
    #[must_use]
    pub fn parse(word: &str) -> Self {
        match word {
            "add" => Self::Add,
            "edit" => Self::Edit,
            "delete" => Self::Delete,
            "branch" => Self::Branch,
            "integrate" => Self::Integrate,
            "import" => Self::Import,
            "purge" => Self::Purge,
            "archive" => Self::Archive,
            "move/add" => Self::MoveAdd,
            "move/delete" => Self::MoveDelete,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Branch => "branch",
            Self::Integrate => "integrate",
            Self::Import => "import",
            Self::Purge => "purge",
            Self::Archive => "archive",
            Self::MoveAdd => "move/add",
            Self::MoveDelete => "move/delete",
            Self::Other(word) => word,
        }
    }

    #[must_use]
    pub fn is_in(&self, category: OperationCategory) -> bool {
        match category {
            OperationCategory::AddLike => {
                matches!(self, Self::Add | Self::Import | Self::MoveAdd)
            }
            OperationCategory::DeleteLike => matches!(
                self,
                Self::Delete | Self::Purge | Self::Archive | Self::MoveDelete
            ),
            OperationCategory::ExistsLike => {
                matches!(self, Self::Add | Self::Edit | Self::Import | Self::MoveAdd)
            }
        }
    }

    #[must_use]
    pub fn is_add_like(&self) -> bool {
        self.is_in(OperationCategory::AddLike)
    }

    #[must_use]
    pub fn is_delete_like(&self) -> bool {
        self.is_in(OperationCategory::DeleteLike)
    }

    #[must_use]
    pub fn is_exists_like(&self) -> bool {
        self.is_in(OperationCategory::ExistsLike)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One affected file from a changelist description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: String,
    pub revision: u64,
    pub operation: Operation,
}

/// A content problem that blocks the submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// An asset was added without its `.meta` file.
    MissingMeta { asset: String },
    /// A `.meta` file was added without the asset it describes.
    MissingAsset { meta: String },
    /// An asset was deleted while its `.meta` file remains in the depot.
    OrphanedMeta { asset: String },
}

impl Violation {
    /// The depot path the violation was raised against.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::MissingMeta { asset } | Self::OrphanedMeta { asset } => asset,
            Self::MissingAsset { meta } => meta,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMeta { asset } => write!(f, "Missing .meta file for '{asset}'"),
            Self::MissingAsset { meta } => write!(f, "Missing asset for .meta file '{meta}'"),
            Self::OrphanedMeta { asset } => {
                write!(f, "Need to delete the orphaned .meta for '{asset}'")
            }
        }
    }
}

/// Final decision of one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub allowed: bool,
    pub violations: Vec<Violation>,
}

impl Verdict {
    #[must_use]
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            violations: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            allowed: violations.is_empty(),
            violations,
        }
    }
}

/// Read-only rules that scope which files are validated and when validation is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub path_whitelist: Vec<String>,
    pub bypass_keyphrase: String,
}

impl ValidationPolicy {
    #[must_use]
    pub fn new(path_whitelist: Vec<String>, bypass_keyphrase: impl Into<String>) -> Self {
        Self {
            path_whitelist,
            bypass_keyphrase: bypass_keyphrase.into(),
        }
    }

    /// Returns the first whitelist entry that prefixes `directory`.
    ///
    /// An empty whitelist matches nothing.
    #[must_use]
    pub fn whitelist_match(&self, directory: &str) -> Option<&str> {
        self.path_whitelist
            .iter()
            .map(String::as_str)
            .find(|prefix| directory.starts_with(prefix))
    }

    /// An empty key-phrase never bypasses.
    #[must_use]
    pub fn is_bypassed_by(&self, line: &str) -> bool {
        !self.bypass_keyphrase.is_empty() && line.contains(&self.bypass_keyphrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_matches_known_words_case_sensitively() {
        assert_eq!(Operation::parse("move/add"), Operation::MoveAdd);
        assert_eq!(Operation::parse("purge"), Operation::Purge);
        assert_eq!(
            Operation::parse("Add"),
            Operation::Other("Add".to_string())
        );
    }

    #[test]
    fn display_round_trips_raw_word() {
        assert_eq!(Operation::MoveDelete.to_string(), "move/delete");
        assert_eq!(Operation::Other("undo".to_string()).to_string(), "undo");
    }

    #[test]
    fn add_like_operations() {
        for word in ["add", "import", "move/add"] {
            assert!(Operation::parse(word).is_add_like(), "{word}");
        }
        for word in ["edit", "delete", "branch", "integrate"] {
            assert!(!Operation::parse(word).is_add_like(), "{word}");
        }
    }

    #[test]
    fn delete_like_operations() {
        for word in ["delete", "purge", "archive", "move/delete"] {
            assert!(Operation::parse(word).is_delete_like(), "{word}");
        }
        for word in ["add", "edit", "import"] {
            assert!(!Operation::parse(word).is_delete_like(), "{word}");
        }
    }

    #[test]
    fn exists_like_includes_edit_but_not_delete() {
        assert!(Operation::Edit.is_exists_like());
        assert!(Operation::MoveAdd.is_exists_like());
        assert!(!Operation::Delete.is_exists_like());
        assert!(!Operation::Branch.is_exists_like());
    }

    #[test]
    fn unknown_operations_belong_to_no_category() {
        let op = Operation::parse("undo");

        assert!(!op.is_add_like());
        assert!(!op.is_delete_like());
        assert!(!op.is_exists_like());
    }

    #[test]
    fn add_and_delete_vocabularies_are_disjoint() {
        for word in [
            "add",
            "edit",
            "delete",
            "branch",
            "integrate",
            "import",
            "purge",
            "archive",
            "move/add",
            "move/delete",
        ] {
            let op = Operation::parse(word);
            assert!(!(op.is_add_like() && op.is_delete_like()), "{word}");
        }
    }

    #[test]
    fn violation_messages_include_path() {
        let missing = Violation::MissingMeta {
            asset: "//Depot/Assets/a.png".to_string(),
        };
        let orphan = Violation::OrphanedMeta {
            asset: "//Depot/Assets/b.png".to_string(),
        };

        assert_eq!(
            missing.to_string(),
            "Missing .meta file for '//Depot/Assets/a.png'"
        );
        assert!(orphan.to_string().contains("orphaned"));
        assert_eq!(orphan.path(), "//Depot/Assets/b.png");
    }

    #[test]
    fn verdict_from_empty_violations_is_allowed() {
        assert_eq!(Verdict::from_violations(Vec::new()), Verdict::allowed());
    }

    #[test]
    fn verdict_with_violations_is_blocked() {
        let verdict = Verdict::from_violations(vec![Violation::MissingAsset {
            meta: "//Depot/Assets/x.png.meta".to_string(),
        }]);

        assert!(!verdict.allowed);
        assert_eq!(verdict.violations.len(), 1);
    }

    #[test]
    fn empty_whitelist_matches_nothing() {
        let policy = ValidationPolicy::default();

        assert_eq!(policy.whitelist_match("//Depot/Game/Assets/"), None);
    }

    #[test]
    fn whitelist_returns_first_matching_prefix() {
        let policy = ValidationPolicy::new(
            vec!["//Other/".to_string(), "//Depot/Game/".to_string()],
            "",
        );

        assert_eq!(
            policy.whitelist_match("//Depot/Game/Assets/"),
            Some("//Depot/Game/")
        );
    }

    #[test]
    fn empty_keyphrase_never_bypasses() {
        let policy = ValidationPolicy::default();

        assert!(!policy.is_bypassed_by("anything at all"));
    }

    #[test]
    fn keyphrase_matches_as_substring() {
        let policy = ValidationPolicy::new(Vec::new(), "p4unity-bypass");

        assert!(policy.is_bypassed_by("fixing things [p4unity-bypass]"));
        assert!(!policy.is_bypassed_by("p4unity bypass"));
    }
}
