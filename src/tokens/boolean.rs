//! Affirmative / negative answer recovery

/// Words that read as a yes.
const AFFIRMATIVE: &[&str] = &["YES", "Y", "TRUE", "T", "1", "ON", "ENABLE"];

/// Words that read as a no.
const NEGATIVE: &[&str] = &["NO", "N", "FALSE", "F", "0", "OFF", "DISABLE"];

/// Map a reply to a boolean by exact membership in a closed word list.
///
/// The input is trimmed and uppercased first. Anything outside the two
/// lists, including empty input, yields no answer - there is no substring
/// fallback here.
pub fn parse_boolean(text: &str) -> Option<bool> {
    let token = text.trim().to_uppercase();
    if AFFIRMATIVE.contains(&token.as_str()) {
        return Some(true);
    }
    if NEGATIVE.contains(&token.as_str()) {
        return Some(false);
    }
    None
}
