mod path;
pub mod types;

pub use path::{META_SUFFIX, extension, is_meta, split_depot_path, strip_meta};
pub use types::*;
