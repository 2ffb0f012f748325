//! Ordered repair rules that rewrite quasi-JSON into parseable JSON
//!
//! Model output often carries JSON-like text that strict parsing rejects:
//! unquoted barewords, single-quoted strings, stray padding inside braces.
//! The rules here run in a fixed order; later rules assume earlier rules
//! already normalized quoting. A rule whose pattern does not match leaves
//! the text unchanged, and validity is only ever decided by the strict
//! parse downstream.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Quoted key plus colon spacing, the anchor for the value-run rule.
static KEY_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r#""[\w-]+"\s*:\s*"#).unwrap());

/// Boundary ending an unquoted value run: a comma followed by the next
/// quoted key.
static RUN_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r#",\s*""#).unwrap());

static OPEN_BRACE_PADDING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\s+").unwrap());
static CLOSE_BRACE_PADDING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\}").unwrap());

static SINGLE_QUOTED_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)"\s*:\s*'([^']*)'"#).unwrap());

static BARE_WORD_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"("[\w-]+")\s*:\s*([A-Za-z_]+)"#).unwrap());

static MIXED_QUOTE_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r#""'|'""#).unwrap());

/// Repair rules in application order. Order is load-bearing: the
/// single-quote and bareword rules expect the value-run rule to have
/// wrapped everything it could, and the final collapse rule cleans up
/// quote pairs the earlier rules left adjacent.
const REPAIR_RULES: &[(&str, fn(&str) -> String)] = &[
    ("trim_brace_padding", trim_brace_padding),
    ("quote_value_runs", quote_value_runs),
    ("requote_single_quoted", requote_single_quoted),
    ("quote_bare_words", quote_bare_words),
    ("collapse_mixed_quotes", collapse_mixed_quotes),
];

/// Rewrite quasi-JSON into text intended to pass a strict JSON parse.
///
/// Never fails; a rule that does not match returns its input unchanged.
/// The output is not guaranteed to be valid JSON - the caller's strict
/// parse remains the authority.
pub fn normalize_json_string(text: &str) -> String {
    let mut current = text.to_string();
    for &(name, rule) in REPAIR_RULES {
        let repaired = rule(&current);
        if repaired != current {
            trace!(rule = name, "repair rule rewrote candidate");
            current = repaired;
        }
    }
    current
}

/// Drop whitespace just inside the outer braces, first occurrence on each
/// side, then trim the ends.
fn trim_brace_padding(text: &str) -> String {
    let opened = OPEN_BRACE_PADDING.replace(text, "{");
    let closed = CLOSE_BRACE_PADDING.replace(&opened, "}");
    closed.trim().to_string()
}

/// Wrap an unquoted, unbracketed value run in double quotes.
///
/// The run starts right after a `"key":` prefix unless the first character
/// opens a string or a nested structure, and extends to the next `,"`
/// boundary or to an object close at the very end of the text. The
/// boundary itself is left in place, and the run is quoted verbatim as an
/// opaque string, spacing included.
fn quote_value_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut cursor = 0;

    while let Some(prefix) = KEY_PREFIX.find_at(text, cursor) {
        out.push_str(&text[cursor..prefix.end()]);
        cursor = prefix.end();

        let rest = &text[cursor..];
        let starts_structured = matches!(rest.chars().next(), None | Some('"' | '\'' | '[' | '{'));
        if starts_structured {
            continue;
        }

        // A run must span at least one character, so the boundary search
        // starts past the first byte.
        let boundary = match RUN_BOUNDARY.find_at(rest, 1) {
            Some(found) => Some(found.start()),
            None => rest
                .rfind('}')
                .filter(|&close| close >= 1 && close + 1 == rest.len()),
        };
        let run_end = match boundary {
            Some(run_end) => run_end,
            None => continue,
        };

        out.push('"');
        out.push_str(&rest[..run_end]);
        out.push('"');
        cursor += run_end;
    }

    out.push_str(&text[cursor..]);
    out
}

/// Rewrite `"key": 'value'` into double-quoted form. Runs after the
/// value-run rule so already-quoted values are never touched.
fn requote_single_quoted(text: &str) -> String {
    SINGLE_QUOTED_VALUE
        .replace_all(text, r#""$1": "$2""#)
        .into_owned()
}

/// Wrap a bare alphabetic/underscore word value in double quotes, unless
/// the word runs into a quote or another word character. Also fires on
/// `true`, `false` and `null`, which become strings.
fn quote_bare_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;

    for caps in BARE_WORD_VALUE.captures_iter(text) {
        let (whole, key, word) = match (caps.get(0), caps.get(1), caps.get(2)) {
            (Some(whole), Some(key), Some(word)) => (whole, key, word),
            _ => continue,
        };
        let following = text[whole.end()..].chars().next();
        let keep = matches!(
            following,
            Some(c) if c == '"' || c == '_' || c.is_ascii_alphanumeric()
        );

        out.push_str(&text[last..whole.start()]);
        if keep {
            out.push_str(whole.as_str());
        } else {
            out.push_str(key.as_str());
            out.push_str(": \"");
            out.push_str(word.as_str());
            out.push('"');
        }
        last = whole.end();
    }

    out.push_str(&text[last..]);
    out
}

/// Collapse `"'` and `'"` pairs into a single double quote in one pass.
/// Sequential single-character replacements would differ on overlapping
/// runs, so this is a single alternation scan.
fn collapse_mixed_quotes(text: &str) -> String {
    MIXED_QUOTE_PAIR.replace_all(text, "\"").into_owned()
}
