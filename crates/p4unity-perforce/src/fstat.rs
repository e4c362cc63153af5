use std::sync::LazyLock;

use p4unity_core::Operation;
use regex::Regex;

static HEAD_ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)headAction\s+([\w/]+)").expect("head action pattern is valid")
});

// "<file> - no file(s) at that changelist number." : known to the server, not at that change
// "<file> - no such file(s)."                      : never known to the server
static NO_FILES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"no\s+(?:such)?\s?file\(s\)").expect("no files pattern is valid")
});

/// What `p4 fstat` had to say about a single depot path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FstatResult {
    NotFound,
    NoHeadAction,
    HeadAction(Operation),
}

impl FstatResult {
    #[must_use]
    pub fn parse(output: &str) -> Self {
        if let Some(captures) = HEAD_ACTION.captures(output) {
            return Self::HeadAction(Operation::parse(&captures[1]));
        }
        if Self::reports_no_files(output) {
            Self::NotFound
        } else {
            Self::NoHeadAction
        }
    }

    #[must_use]
    pub fn reports_no_files(output: &str) -> bool {
        NO_FILES.is_match(output)
    }

    /// True when the head revision leaves the file present in the depot.
    #[must_use]
    pub fn exists_like(&self) -> bool {
        matches!(self, Self::HeadAction(op) if op.is_exists_like())
    }
}
