mod error;
mod record;
mod report;

pub use error::ParseError;
pub use record::parse_file_record;
pub use report::{ChangelistReport, FILE_TAG, HEADER_TAG, tagged_lines};
