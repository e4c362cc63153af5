use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unexpected report shape: cannot parse file record '{line}'")]
    UnexpectedRecordShape { line: String },

    #[error("invalid revision '{revision}' in file record '{line}'")]
    InvalidRevision {
        line: String,
        revision: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
