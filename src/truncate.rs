//! Length-limited text truncation
//!
//! Replies quoted back into prompts or UI surfaces need a hard length cap
//! that still reads like a deliberate cut. Truncation prefers a sentence
//! boundary, then a word boundary, and only then cuts mid-word.

const ELLIPSIS: &str = "...";

/// Shorten `text` to at most `max_length` characters.
///
/// Within the limit the text comes back unchanged. Otherwise the cut point
/// is chosen in priority order inside the first `max_length` characters:
/// the last period (kept, no ellipsis), the last whitespace (trimmed,
/// ellipsis appended), or a hard cut that reserves room for the ellipsis.
/// Lengths are counted in characters, not bytes.
pub fn truncate_to_sentence(text: &str, max_length: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_length {
        return text.to_string();
    }

    let window = &chars[..max_length];

    if let Some(period) = window.iter().rposition(|&c| c == '.') {
        let cut: String = chars[..=period].iter().collect();
        let cut = cut.trim();
        if !cut.is_empty() {
            return cut.to_string();
        }
    }

    if let Some(space) = window.iter().rposition(|c| c.is_whitespace()) {
        let cut: String = chars[..space].iter().collect();
        let cut = cut.trim();
        if !cut.is_empty() {
            return format!("{}{}", cut, ELLIPSIS);
        }
    }

    let keep = max_length.saturating_sub(ELLIPSIS.len());
    let cut: String = chars[..keep].iter().collect();
    format!("{}{}", cut.trim(), ELLIPSIS)
}
