//! RESPOND / IGNORE / STOP directive recovery

use std::fmt;

/// Moderation directive recovered from a model reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseDirective {
    Respond,
    Ignore,
    Stop,
}

impl fmt::Display for ResponseDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResponseDirective::Respond => "RESPOND",
            ResponseDirective::Ignore => "IGNORE",
            ResponseDirective::Stop => "STOP",
        };
        write!(f, "{}", name)
    }
}

/// Directives in fallback priority order: when no whole-line match exists,
/// the first word found anywhere in the text wins in this order.
const DIRECTIVES: &[(&str, ResponseDirective)] = &[
    ("RESPOND", ResponseDirective::Respond),
    ("IGNORE", ResponseDirective::Ignore),
    ("STOP", ResponseDirective::Stop),
];

/// Classify a reply as RESPOND, IGNORE or STOP.
///
/// The first line is stripped of brackets, trimmed and uppercased; an
/// exact whole-line match decides immediately. Otherwise the entire text
/// is scanned for the directive words in priority order.
pub fn parse_respond_token(text: &str) -> Option<ResponseDirective> {
    let first_line = text.lines().next().unwrap_or("");
    let cleaned = first_line.replace(['[', ']'], "");
    let cleaned = cleaned.trim().to_uppercase();
    for &(word, directive) in DIRECTIVES {
        if cleaned == word {
            return Some(directive);
        }
    }

    let upper = text.to_uppercase();
    for &(word, directive) in DIRECTIVES {
        if upper.contains(word) {
            return Some(directive);
        }
    }
    None
}
