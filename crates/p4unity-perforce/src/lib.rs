mod client;
mod error;
mod fstat;

pub use client::{ConnectionSettings, DEFAULT_EXECUTABLE, P4Client};
pub use error::PerforceError;
pub use fstat::FstatResult;

pub type Result<T> = std::result::Result<T, PerforceError>;
