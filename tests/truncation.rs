//! Truncation over realistic reply text.

use sift::truncate_to_sentence;

#[test]
fn test_reply_trimmed_at_sentence() {
    let reply = "The account looks fine. No anomalies were found in the last week. \
                 I would still recommend enabling alerts.";
    assert_eq!(
        truncate_to_sentence(reply, 80),
        "The account looks fine. No anomalies were found in the last week."
    );
}

#[test]
fn test_short_reply_passes_through() {
    let reply = "All good.";
    assert_eq!(truncate_to_sentence(reply, 200), reply);
}

#[test]
fn test_no_sentence_backs_up_to_a_word() {
    let reply = "summarized findings attached below for review";
    assert_eq!(truncate_to_sentence(reply, 22), "summarized findings...");
}

#[test]
fn test_url_dot_acts_as_sentence_boundary() {
    // The sentence rule keys on periods, so a URL gets cut at its last
    // dot inside the window.
    let reply = "https://example.com/a/very/long/path/that/never/ends";
    assert_eq!(truncate_to_sentence(reply, 20), "https://example.");
}

#[test]
fn test_unbroken_token_is_hard_cut() {
    let reply = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let out = truncate_to_sentence(reply, 20);
    assert_eq!(out, "ABCDEFGHIJKLMNOPQ...");
    assert_eq!(out.chars().count(), 20);
}

#[test]
fn test_multibyte_reply_counts_characters() {
    let reply = "Überprüfung läuft noch, bitte warten";
    let out = truncate_to_sentence(reply, 17);
    assert_eq!(out, "Überprüfung...");
}
