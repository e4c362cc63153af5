use std::sync::LazyLock;

use p4unity_core::{FileRecord, Operation};
use regex::Regex;

use crate::error::ParseError;

// <depot-path>#<revision> <operation>
static FILE_RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^#]+)#(\d+) ([\w/]+)$").expect("file record pattern is valid")
});

/// Parses one file line of a `describe` report, e.g.
/// `//Depot/Game/Assets/Native/Binding.cs.meta#1 add`.
///
/// # Errors
///
/// Returns [`ParseError::UnexpectedRecordShape`] if the line does not have exactly
/// the `path#revision operation` shape.
pub fn parse_file_record(line: &str) -> Result<FileRecord, ParseError> {
    let Some(captures) = FILE_RECORD.captures(line) else {
        return Err(ParseError::UnexpectedRecordShape {
            line: line.to_string(),
        });
    };

    let path = &captures[1];
    let revision_text = &captures[2];
    let operation = &captures[3];

    let revision = revision_text
        .parse()
        .map_err(|source| ParseError::InvalidRevision {
            line: line.to_string(),
            revision: revision_text.to_string(),
            source,
        })?;

    Ok(FileRecord {
        path: path.to_string(),
        revision,
        operation: Operation::parse(operation),
    })
}
