//! # sift
//!
//! Recovery of structured data from model replies. Models asked for JSON
//! return JSON wrapped in prose, fenced in markdown, misquoted, or cut off
//! mid-document; sift digs the intended value back out instead of failing
//! the whole reply.
//!
//! The core entry points are [`extract::extract_object`] and
//! [`extract::extract_array`], which run a staged pipeline over a reply and
//! report where in the reply the value was found. Around them sit token
//! parsers for directive-style replies, a sentence-aware truncator, and a
//! processor/formatter layer used by the `sift` binary.

pub mod extract;
pub mod formats;
pub mod processor;
pub mod testing;
pub mod tokens;
pub mod truncate;

pub use extract::{
    clean_json_response, extract_array, extract_attributes, extract_named_attributes,
    extract_object, find_bare_structure, find_code_block, is_parseable, normalize_json_string,
    parse_json_array, parse_json_object, strip_code_markers, Extraction, Provenance, StageMiss,
};
pub use processor::{
    process_file, process_text, ProcessError, RecoveryMode, RecoverySpec, Report,
};
pub use tokens::{
    parse_action_flags, parse_boolean, parse_respond_token, ActionFlags, ResponseDirective,
};
pub use truncate::truncate_to_sentence;
