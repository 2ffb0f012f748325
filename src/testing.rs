//! Canned replies for tests and demos
//!
//! Each sample is a reply shape seen in the wild, small enough to reason
//! about by hand. Integration tests use these instead of inlining the
//! same strings in every file.

/// A representative model reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// An object inside a labeled code fence, with prose around it.
    FencedObject,
    /// An array inside a labeled code fence.
    FencedArray,
    /// A valid object embedded mid-sentence.
    ProseWrappedObject,
    /// An object whose value uses single quotes.
    SingleQuotedObject,
    /// An object whose value lost its quotes entirely.
    BarewordObject,
    /// An object cut off mid-value, unclosed.
    TruncatedObject,
    /// A bracketed directive followed by an explanation.
    DirectiveReply,
    /// A reply that lists action markers one per line.
    ActionList,
    /// Prose with no recoverable structure at all.
    PlainProse,
}

impl Sample {
    /// The raw reply text.
    pub fn source(&self) -> &'static str {
        match self {
            Sample::FencedObject => {
                "Here is the result:\n```json\n{\"user\": \"alice\", \"score\": 10}\n```\nDone."
            }
            Sample::FencedArray => "```json\n[\"a\", \"b\"]\n```",
            Sample::ProseWrappedObject => "The answer is {\"status\": \"ok\"} as requested.",
            Sample::SingleQuotedObject => "{\"name\": 'bob'}",
            Sample::BarewordObject => "{\"mood\": happy}",
            Sample::TruncatedObject => "{\"text\": \"hello wor",
            Sample::DirectiveReply => "[RESPOND]\nBecause this is relevant.",
            Sample::ActionList => "I will do these:\n[LIKE]\n[REPLY]",
            Sample::PlainProse => "I could not find anything useful.",
        }
    }

    /// Every sample, in declaration order.
    pub fn all() -> Vec<Sample> {
        vec![
            Sample::FencedObject,
            Sample::FencedArray,
            Sample::ProseWrappedObject,
            Sample::SingleQuotedObject,
            Sample::BarewordObject,
            Sample::TruncatedObject,
            Sample::DirectiveReply,
            Sample::ActionList,
            Sample::PlainProse,
        ]
    }
}
