/// Upper bound on the joined length of a tag list, separators included.
pub const MAX_TOTAL_LENGTH: usize = 500;
pub const TAG_SEPARATOR: &str = ", ";

/// Ordered, length-bounded list of tags produced for a single request.
///
/// Every tag is non-empty and trimmed, and `tags.join(", ")` is at most
/// [`MAX_TOTAL_LENGTH`] characters long. Lengths are counted in UTF-16 code
/// units, the unit browser clients measure strings in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
    total_length: usize,
}

impl TagSet {
    /// Splits comma-separated model output into tags, dropping blank
    /// fragments, then drops tags from the end until the joined length fits.
    pub fn from_raw(raw: &str) -> Self {
        let mut tags: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();

        let mut total_length = joined_length(&tags);
        while total_length > MAX_TOTAL_LENGTH && !tags.is_empty() {
            tags.pop();
            total_length = joined_length(&tags);
        }

        Self { tags, total_length }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn total_length(&self) -> usize {
        self.total_length
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn joined(&self) -> String {
        self.tags.join(TAG_SEPARATOR)
    }

    pub fn into_tags(self) -> Vec<String> {
        self.tags
    }
}

pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

fn joined_length(tags: &[String]) -> usize {
    let units: usize = tags.iter().map(|t| text_length(t)).sum();
    let separators = tags.len().saturating_sub(1) * text_length(TAG_SEPARATOR);
    units + separators
}
