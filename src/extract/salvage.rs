//! Regex key/value recovery for text that defeats structural parsing
//!
//! The salvage path bypasses JSON entirely: it scans for `"key": "value"`
//! pairs directly, tolerating a missing closing quote so truncated output
//! still yields its last attribute. Values are always plain strings.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Quoted pair with an optional closing quote. The value may be empty.
static ATTRIBUTE_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)"\s*:\s*"([^"]*)"?"#).unwrap());

/// Collect every `"key": "value"` pair in the text.
///
/// A key that appears more than once keeps its last value. Always returns
/// a map, possibly empty.
pub fn extract_attributes(text: &str) -> BTreeMap<String, String> {
    let mut attributes = BTreeMap::new();
    for caps in ATTRIBUTE_PAIR.captures_iter(text) {
        if let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) {
            attributes.insert(key.as_str().to_string(), value.as_str().to_string());
        }
    }
    attributes
}

/// Look up specific attribute names, case-insensitively, first match per
/// name. Names that do not appear are omitted from the result.
pub fn extract_named_attributes<S: AsRef<str>>(
    text: &str,
    names: &[S],
) -> BTreeMap<String, String> {
    let mut attributes = BTreeMap::new();
    for name in names {
        let name = name.as_ref();
        let pattern = format!(r#"(?i)"{}"\s*:\s*"([^"]*)"?"#, regex::escape(name));
        let matcher = match Regex::new(&pattern) {
            Ok(matcher) => matcher,
            Err(_) => continue,
        };
        if let Some(caps) = matcher.captures(text) {
            if let Some(value) = caps.get(1) {
                attributes.insert(name.to_string(), value.as_str().to_string());
            }
        }
    }
    attributes
}
