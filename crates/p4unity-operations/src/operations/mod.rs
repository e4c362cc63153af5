mod validate;

pub use validate::{ValidateOperation, ValidateOutcome, build_context};
