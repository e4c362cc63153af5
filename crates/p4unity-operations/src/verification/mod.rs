mod context;
mod engine;
mod result;
pub mod rules;

pub use context::{SkippedFile, VerificationContext};
pub use engine::VerificationEngine;
pub use result::VerificationResult;
