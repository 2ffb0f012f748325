//! Recovery orchestration
//!
//! A [`RecoverySpec`] names what a reply was supposed to contain; running
//! it over text produces a [`Report`] that downstream formatting and the
//! CLI share. Each mode delegates to one extractor or token parser.

use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::extract::{
    extract_array, extract_attributes, extract_named_attributes, extract_object, Extraction,
    Provenance,
};
use crate::tokens::{parse_action_flags, parse_boolean, parse_respond_token};

/// What kind of content to recover from a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryMode {
    /// A JSON object, via the staged extraction pipeline.
    Object,
    /// A JSON array, via the staged extraction pipeline.
    Array,
    /// Loose `"key": "value"` pairs, without requiring parseable JSON.
    Attributes,
    /// A RESPOND / IGNORE / STOP directive.
    Respond,
    /// A yes/no style answer.
    Boolean,
    /// Bracketed action markers.
    Actions,
}

impl RecoveryMode {
    /// Parse a mode name as given on the command line.
    pub fn from_string(name: &str) -> Result<RecoveryMode, ProcessError> {
        match name.to_lowercase().as_str() {
            "object" => Ok(RecoveryMode::Object),
            "array" => Ok(RecoveryMode::Array),
            "attributes" => Ok(RecoveryMode::Attributes),
            "respond" => Ok(RecoveryMode::Respond),
            "boolean" => Ok(RecoveryMode::Boolean),
            "actions" => Ok(RecoveryMode::Actions),
            _ => Err(ProcessError::InvalidMode(name.to_string())),
        }
    }

    /// Canonical lowercase name, as accepted by [`from_string`](Self::from_string).
    pub fn name(&self) -> &'static str {
        match self {
            RecoveryMode::Object => "object",
            RecoveryMode::Array => "array",
            RecoveryMode::Attributes => "attributes",
            RecoveryMode::Respond => "respond",
            RecoveryMode::Boolean => "boolean",
            RecoveryMode::Actions => "actions",
        }
    }

    /// One-line description for help listings.
    pub fn description(&self) -> &'static str {
        match self {
            RecoveryMode::Object => "Recover a JSON object from the reply",
            RecoveryMode::Array => "Recover a JSON array from the reply",
            RecoveryMode::Attributes => "Scrape key/value pairs without full parsing",
            RecoveryMode::Respond => "Read a RESPOND, IGNORE or STOP directive",
            RecoveryMode::Boolean => "Read a yes/no answer",
            RecoveryMode::Actions => "Read bracketed action markers",
        }
    }

    /// Every mode, in listing order.
    pub fn all() -> Vec<RecoveryMode> {
        vec![
            RecoveryMode::Object,
            RecoveryMode::Array,
            RecoveryMode::Attributes,
            RecoveryMode::Respond,
            RecoveryMode::Boolean,
            RecoveryMode::Actions,
        ]
    }
}

/// A recovery request: the mode plus any mode-specific knobs.
#[derive(Debug, Clone)]
pub struct RecoverySpec {
    pub mode: RecoveryMode,
    /// For [`RecoveryMode::Attributes`]: restrict scraping to these keys.
    /// Empty means take every pair found.
    pub keys: Vec<String>,
}

impl RecoverySpec {
    pub fn new(mode: RecoveryMode) -> RecoverySpec {
        RecoverySpec {
            mode,
            keys: Vec::new(),
        }
    }

    pub fn with_keys(mode: RecoveryMode, keys: Vec<String>) -> RecoverySpec {
        RecoverySpec { mode, keys }
    }
}

/// Outcome of running a [`RecoverySpec`] over one reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Mode name the report was produced under.
    pub mode: String,
    /// Whether the mode recovered anything at all.
    pub found: bool,
    /// Which pipeline stage produced the value, for the JSON modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
    /// The recovered value, absent when nothing was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// Errors raised while turning input into a [`Report`].
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessError {
    /// The requested mode name is not one of [`RecoveryMode::all`].
    InvalidMode(String),
    /// Reading the input file failed.
    IoError(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::InvalidMode(name) => write!(f, "unknown recovery mode: {name}"),
            ProcessError::IoError(msg) => write!(f, "failed to read input: {msg}"),
        }
    }
}

impl Error for ProcessError {}

fn extraction_fields(extraction: Option<Extraction>) -> (bool, Option<Provenance>, Option<Value>) {
    match extraction {
        Some(extraction) => (true, Some(extraction.provenance), Some(extraction.value)),
        None => (false, None, None),
    }
}

/// Run a recovery spec over a reply held in memory.
pub fn process_text(text: &str, spec: &RecoverySpec) -> Report {
    let (found, provenance, value) = match &spec.mode {
        RecoveryMode::Object => extraction_fields(extract_object(text)),
        RecoveryMode::Array => extraction_fields(extract_array(text)),
        RecoveryMode::Attributes => {
            let attributes = if spec.keys.is_empty() {
                extract_attributes(text)
            } else {
                extract_named_attributes(text, &spec.keys)
            };
            if attributes.is_empty() {
                (false, None, None)
            } else {
                (true, None, serde_json::to_value(&attributes).ok())
            }
        }
        RecoveryMode::Respond => match parse_respond_token(text) {
            Some(directive) => (true, None, Some(Value::String(directive.to_string()))),
            None => (false, None, None),
        },
        RecoveryMode::Boolean => match parse_boolean(text) {
            Some(answer) => (true, None, Some(Value::Bool(answer))),
            None => (false, None, None),
        },
        RecoveryMode::Actions => {
            let flags = parse_action_flags(text);
            if flags.any() {
                (true, None, serde_json::to_value(flags).ok())
            } else {
                (false, None, None)
            }
        }
    };

    Report {
        mode: spec.mode.name().to_string(),
        found,
        provenance,
        value,
    }
}

/// Read a file and run a recovery spec over its contents.
pub fn process_file<P: AsRef<Path>>(path: P, spec: &RecoverySpec) -> Result<Report, ProcessError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| ProcessError::IoError(format!("{}: {}", path.display(), e)))?;
    Ok(process_text(&text, spec))
}
