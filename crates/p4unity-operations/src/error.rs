use thiserror::Error;

/// How a failed run should be reported to whoever invoked the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The changelist could not be identified or fetched; nothing was validated.
    Usage,
    /// The report or a depot lookup could not be trusted; validation was abandoned.
    Structural,
}

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Parse(#[from] p4unity_parse::ParseError),

    #[error(transparent)]
    Perforce(#[from] p4unity_perforce::PerforceError),

    #[error("cannot find changelist [{0}]")]
    ChangelistNotFound(u32),

    #[error("failed to fetch changelist [{changelist}]")]
    ChangelistFetch {
        changelist: u32,
        #[source]
        source: Box<OperationError>,
    },

    #[error("p4 describe [{changelist}] output is empty")]
    EmptyHeader { changelist: u32 },

    #[error("changelist [{changelist}] has no file records")]
    NoFileRecords { changelist: u32 },

    #[error("fstat failed for '{path}'")]
    OracleFailed {
        path: String,
        #[source]
        source: Box<OperationError>,
    },
}

impl OperationError {
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::ChangelistNotFound(_) | Self::ChangelistFetch { .. } => ErrorClass::Usage,
            Self::Parse(_)
            | Self::Perforce(_)
            | Self::EmptyHeader { .. }
            | Self::NoFileRecords { .. }
            | Self::OracleFailed { .. } => ErrorClass::Structural,
        }
    }
}

pub type Result<T> = std::result::Result<T, OperationError>;
