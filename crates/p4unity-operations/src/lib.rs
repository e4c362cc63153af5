pub mod classification;
mod error;
pub mod operations;
pub mod policy;
pub mod providers;
pub mod traits;
pub mod verification;

#[cfg(test)]
pub mod mocks;

pub use error::{ErrorClass, OperationError, Result};
