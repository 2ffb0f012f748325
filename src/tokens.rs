//! Token parsers for non-JSON reply protocols
//!
//! Some prompts ask the model for a single control token instead of a
//! document: a respond/ignore/stop directive, a yes/no answer, or a list
//! of bracketed action markers. These parsers recover those tokens from
//! replies that rarely contain only the token.

pub mod action;
pub mod boolean;
pub mod respond;

pub use action::{parse_action_flags, ActionFlags};
pub use boolean::parse_boolean;
pub use respond::{parse_respond_token, ResponseDirective};
