//! Parse-gated validation of candidate JSON text

use serde_json::Value;

/// True only when the trimmed text carries a matching `{..}` or `[..]`
/// shell and a strict parse succeeds. A candidate passing this check is
/// provably parseable, not merely bracket-shaped.
pub fn is_parseable(text: &str) -> bool {
    parse_checked(text).is_some()
}

/// Shape-gate and strict-parse in one step so the pipeline keeps the
/// parsed value instead of parsing a second time.
pub(crate) fn parse_checked(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    let object_shaped = trimmed.starts_with('{') && trimmed.ends_with('}');
    let array_shaped = trimmed.starts_with('[') && trimmed.ends_with(']');
    if !object_shaped && !array_shaped {
        return None;
    }
    serde_json::from_str(trimmed).ok()
}
