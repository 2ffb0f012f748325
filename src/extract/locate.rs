//! Candidate span discovery inside noisy model text
//!
//! Model replies wrap JSON in prose, markdown fences, and stray backticks.
//! The locators here find the most plausible JSON span without judging its
//! validity - parsing is the next stage's job.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fenced block explicitly labeled as JSON. The inner content is captured
/// verbatim, without the label line or the closing fence.
static FENCED_JSON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json\s*\n?([\s\S]*?)\n?\s*```").unwrap());

/// Return the content of the first ```json fenced block, if any.
///
/// Unlabeled fences do not count; their content is still reachable through
/// the bare-structure locator after marker stripping.
pub fn find_code_block(text: &str) -> Option<&str> {
    FENCED_JSON
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|content| content.as_str())
}

/// Remove fence markers and backticks, keeping everything else in place.
pub fn strip_code_markers(text: &str) -> String {
    text.replace("```json", "")
        .replace("```", "")
        .replace('`', "")
}

/// Find the widest bare `{..}` or `[..]` span after marker stripping.
///
/// The object span is checked first; the array span is only considered when
/// no usable object span exists. A span whose closing bracket sits at or
/// before its opening bracket yields no candidate for that bracket type.
pub fn find_bare_structure(text: &str) -> Option<String> {
    let stripped = strip_code_markers(text);

    if let (Some(open), Some(close)) = (stripped.find('{'), stripped.rfind('}')) {
        if close > open {
            return Some(stripped[open..=close].to_string());
        }
    }
    if let (Some(open), Some(close)) = (stripped.find('['), stripped.rfind(']')) {
        if close > open {
            return Some(stripped[open..=close].to_string());
        }
    }
    None
}

/// Best-effort JSON span for display or further processing; empty string
/// when no bracket boundary exists in the text.
pub fn clean_json_response(text: &str) -> String {
    find_bare_structure(text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_code_block_basic() {
        let text = "Before\n```json\n{\"a\": 1}\n```\nAfter";
        assert_eq!(find_code_block(text), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_find_code_block_single_line() {
        let text = "```json {\"a\": 1} ```";
        assert_eq!(find_code_block(text), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_find_code_block_requires_label() {
        let text = "```\n{\"a\": 1}\n```";
        assert_eq!(find_code_block(text), None);
    }

    #[test]
    fn test_find_code_block_missing() {
        assert_eq!(find_code_block("no fences here"), None);
    }

    #[test]
    fn test_find_code_block_takes_first() {
        let text = "```json\n{\"first\": 1}\n```\n```json\n{\"second\": 2}\n```";
        assert_eq!(find_code_block(text), Some("{\"first\": 1}"));
    }

    #[test]
    fn test_strip_code_markers() {
        let text = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_markers(text), "\n{\"a\": 1}\n");
    }

    #[test]
    fn test_strip_inline_backticks() {
        assert_eq!(strip_code_markers("value `x` here"), "value x here");
    }

    #[test]
    fn test_bare_object_in_prose() {
        let text = "the answer is {\"a\": 1} as requested";
        assert_eq!(find_bare_structure(text), Some("{\"a\": 1}".to_string()));
    }

    #[test]
    fn test_bare_array_in_prose() {
        let text = "items: [1, 2, 3] thanks";
        assert_eq!(find_bare_structure(text), Some("[1, 2, 3]".to_string()));
    }

    #[test]
    fn test_object_preferred_over_array() {
        let text = "[1] {\"a\": 2}";
        assert_eq!(find_bare_structure(text), Some("{\"a\": 2}".to_string()));
    }

    #[test]
    fn test_reversed_braces_yield_nothing() {
        assert_eq!(find_bare_structure("} oops {"), None);
    }

    #[test]
    fn test_reversed_object_falls_back_to_array() {
        let text = "} bad { but [1, 2] is fine";
        assert_eq!(find_bare_structure(text), Some("[1, 2]".to_string()));
    }

    #[test]
    fn test_clean_json_response_found() {
        assert_eq!(clean_json_response("x {\"a\": 1} y"), "{\"a\": 1}");
    }

    #[test]
    fn test_clean_json_response_fenced() {
        let text = "```json\n{\"a\": 1}\n```";
        assert_eq!(clean_json_response(text), "{\"a\": 1}");
    }

    #[test]
    fn test_clean_json_response_empty() {
        assert_eq!(clean_json_response("no structure"), "");
        assert_eq!(clean_json_response(""), "");
    }
}
