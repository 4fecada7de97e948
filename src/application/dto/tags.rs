use crate::domain::tags::TagSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTagsDto {
    pub tags: Vec<String>,
    pub total_length: usize,
}

impl From<TagSet> for GeneratedTagsDto {
    fn from(set: TagSet) -> Self {
        let total_length = set.total_length();
        GeneratedTagsDto {
            tags: set.into_tags(),
            total_length,
        }
    }
}
