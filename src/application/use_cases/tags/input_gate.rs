use serde_json::Value;

pub const INPUT_FIELD: &str = "input";

/// Returns the trimmed `input` string of a request payload, or `None` when
/// the field is absent, not a string, or blank.
pub fn accept_input(payload: &Value) -> Option<&str> {
    let trimmed = payload.get(INPUT_FIELD)?.as_str()?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
