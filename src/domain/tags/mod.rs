pub mod tag_set;

pub use tag_set::{MAX_TOTAL_LENGTH, TAG_SEPARATOR, TagSet};
