use p4unity_core::FileRecord;

use crate::error::ParseError;
use crate::record::parse_file_record;

/// Tag `p4 -s` puts in front of changelist header lines.
pub const HEADER_TAG: &str = "text:";
/// Tag `p4 -s` puts in front of affected-file lines.
pub const FILE_TAG: &str = "info1:";

const MISSING_CHANGELIST: &str = "no such changelist";

/// Returns the lines carrying `tag`, with the tag removed, trimmed, and empty lines dropped.
pub fn tagged_lines<'a, I>(lines: I, tag: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| line.strip_prefix(tag))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// The `p4 -s describe -s` output of one changelist, split into its two blocks.
///
/// ```text
/// text: Change 9148 by harry@harry_pc on 2020/01/01 11:11:11 *pending*
/// text:
/// text:  Example changelist
/// text:
/// text: Affected files ...
/// text:
/// info1: //Depot/Game/Assets/Native/Binding.cs.meta#1 add
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelistReport {
    pub header: Vec<String>,
    pub file_lines: Vec<String>,
}

impl ChangelistReport {
    /// Accepts both CRLF and LF line endings.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            header: tagged_lines(raw.lines(), HEADER_TAG),
            file_lines: tagged_lines(raw.lines(), FILE_TAG),
        }
    }

    /// True when the server answered that the changelist does not exist.
    #[must_use]
    pub fn reports_missing_changelist(raw: &str) -> bool {
        raw.lines()
            .next()
            .is_some_and(|first| first.contains(MISSING_CHANGELIST))
    }

    /// The `Change N by ...` line.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.header.first().map(String::as_str)
    }

    /// Header lines after the summary line.
    pub fn message_lines(&self) -> impl Iterator<Item = &str> {
        self.header.iter().skip(1).map(String::as_str)
    }

    /// # Errors
    ///
    /// Returns the first file line that fails to parse; no partial list is produced.
    pub fn records(&self) -> Result<Vec<FileRecord>, ParseError> {
        self.file_lines
            .iter()
            .map(|line| parse_file_record(line))
            .collect()
    }
}
