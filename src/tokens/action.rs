//! Bracketed action flag recovery

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static LIKE_FLAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\[LIKE\]").unwrap());
static RETWEET_FLAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\[RETWEET\]").unwrap());
static QUOTE_FLAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\[QUOTE\]").unwrap());
static REPLY_FLAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\[REPLY\]").unwrap());

/// Which of the four actions a reply asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ActionFlags {
    pub like: bool,
    pub retweet: bool,
    pub quote: bool,
    pub reply: bool,
}

impl ActionFlags {
    /// True when at least one action was requested.
    pub fn any(&self) -> bool {
        self.like || self.retweet || self.quote || self.reply
    }
}

/// Scan a reply for `[LIKE]`, `[RETWEET]`, `[QUOTE]` and `[REPLY]` markers.
///
/// Two passes: a case-insensitive match anywhere in the text, then a
/// line-by-line pass that accepts a trimmed line consisting of exactly one
/// uppercase marker. The second pass only ever sets flags, so a marker
/// found by either pass stays found.
pub fn parse_action_flags(text: &str) -> ActionFlags {
    let mut flags = ActionFlags {
        like: LIKE_FLAG.is_match(text),
        retweet: RETWEET_FLAG.is_match(text),
        quote: QUOTE_FLAG.is_match(text),
        reply: REPLY_FLAG.is_match(text),
    };

    for line in text.lines() {
        match line.trim() {
            "[LIKE]" => flags.like = true,
            "[RETWEET]" => flags.retweet = true,
            "[QUOTE]" => flags.quote = true,
            "[REPLY]" => flags.reply = true,
            _ => {}
        }
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_flag() {
        let flags = parse_action_flags("[LIKE]");
        assert!(flags.like);
        assert!(!flags.retweet);
        assert!(!flags.quote);
        assert!(!flags.reply);
    }

    #[test]
    fn test_one_flag_per_line() {
        let flags = parse_action_flags("[LIKE]\n[REPLY]");
        assert!(flags.like);
        assert!(flags.reply);
        assert!(!flags.retweet);
        assert!(!flags.quote);
    }

    #[test]
    fn test_flags_inside_prose() {
        let flags = parse_action_flags("I will [RETWEET] this and also [QUOTE] it.");
        assert!(flags.retweet);
        assert!(flags.quote);
        assert!(!flags.like);
        assert!(!flags.reply);
    }

    #[test]
    fn test_case_insensitive_markers() {
        let flags = parse_action_flags("[like] and [Reply]");
        assert!(flags.like);
        assert!(flags.reply);
    }

    #[test]
    fn test_indented_exact_line() {
        let flags = parse_action_flags("  [QUOTE]  ");
        assert!(flags.quote);
    }

    #[test]
    fn test_no_markers() {
        let flags = parse_action_flags("nothing to do here");
        assert_eq!(flags, ActionFlags::default());
        assert!(!flags.any());
    }

    #[test]
    fn test_unbracketed_word_ignored() {
        let flags = parse_action_flags("LIKE");
        assert!(!flags.like);
    }

    #[test]
    fn test_any_reports_presence() {
        assert!(parse_action_flags("[REPLY]").any());
        assert!(!parse_action_flags("").any());
    }
}
