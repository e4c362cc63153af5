use p4unity_core::{ValidationPolicy, split_depot_path};

/// Unity's import root; only files below it carry `.meta` sidecars.
pub const ASSETS_SEGMENT: &str = "/Assets/";

/// Why a file was or was not put forward for pairing checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    /// A directory ending in `~` is hidden from the Unity importer.
    TildeIgnored,
    /// `.p4ignore`, `.tests.json` and other dot files.
    DotIgnored,
    WhitelistFailed,
    AssetsPathFailed,
    Accepted { whitelist: String },
}

impl FilterDecision {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::TildeIgnored => "TildeIgnored",
            Self::DotIgnored => "DotIgnored",
            Self::WhitelistFailed => "Whitelist-Failed",
            Self::AssetsPathFailed => "AssetsPath-Failed",
            Self::Accepted { .. } => "Accepted",
        }
    }
}

pub struct PolicyFilter<'a> {
    policy: &'a ValidationPolicy,
}

impl<'a> PolicyFilter<'a> {
    #[must_use]
    pub fn new(policy: &'a ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Applies the tilde, dot-file, whitelist and `/Assets/` rules in that order.
    #[must_use]
    pub fn decide(&self, path: &str) -> FilterDecision {
        let (directory, leaf) = split_depot_path(path);

        if directory.contains("~/") {
            return FilterDecision::TildeIgnored;
        }
        if leaf.starts_with('.') {
            return FilterDecision::DotIgnored;
        }
        let Some(whitelist) = self.policy.whitelist_match(directory) else {
            return FilterDecision::WhitelistFailed;
        };
        if !directory.contains(ASSETS_SEGMENT) {
            return FilterDecision::AssetsPathFailed;
        }
        FilterDecision::Accepted {
            whitelist: whitelist.to_string(),
        }
    }
}
