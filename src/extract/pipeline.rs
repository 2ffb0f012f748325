//! Staged recovery of structured values from raw model text
//!
//! The orchestrator walks an explicit, ordered list of stages and returns
//! the first success: a fenced markdown block, then a bare bracket span
//! over the whole text, then (for objects only) regex attribute salvage.
//! Every miss is absorbed and logged; no stage failure ever reaches the
//! caller as an error.

use crate::extract::locate;
use crate::extract::normalize::normalize_json_string;
use crate::extract::salvage;
use crate::extract::shape;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// How many characters of the input to keep in miss diagnostics.
const SNIPPET_CHARS: usize = 200;

/// Which extraction stage produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Markdown,
    Raw,
    Fallback,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provenance::Markdown => "markdown",
            Provenance::Raw => "raw",
            Provenance::Fallback => "fallback",
        };
        write!(f, "{}", name)
    }
}

/// A recovered value together with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    pub value: Value,
    pub provenance: Provenance,
}

/// Why a stage produced nothing. Absorbed by the orchestrator and surfaced
/// only through diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum StageMiss {
    Structural,
    Parse(String),
    Salvage,
}

impl fmt::Display for StageMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageMiss::Structural => write!(f, "no candidate span found"),
            StageMiss::Parse(msg) => write!(f, "strict parse rejected candidate: {}", msg),
            StageMiss::Salvage => write!(f, "no key/value pattern matched"),
        }
    }
}

impl std::error::Error for StageMiss {}

type Stage = fn(&str) -> Result<Extraction, StageMiss>;

/// Object recovery stages, tried in order, first success wins.
const OBJECT_STAGES: &[(&str, Stage)] = &[
    ("markdown", markdown_stage),
    ("raw", raw_stage),
    ("fallback", fallback_stage),
];

/// Array recovery has no salvage stage.
const ARRAY_STAGES: &[(&str, Stage)] = &[("markdown", markdown_stage), ("raw", raw_stage)];

/// Recover a JSON value from text expected to carry an object.
///
/// A parsed mapping is always accepted, including an empty one. A parsed
/// array is accepted only when non-empty; an empty array ends the chain
/// with no data.
pub fn extract_object(text: &str) -> Option<Extraction> {
    run_stages(text, OBJECT_STAGES, false)
}

/// Recover a non-empty JSON array from text.
///
/// An empty array ends the chain with no data; a non-array value is a
/// stage miss and the next stage runs.
pub fn extract_array(text: &str) -> Option<Extraction> {
    run_stages(text, ARRAY_STAGES, true)
}

/// Value-only facade over [`extract_object`].
pub fn parse_json_object(text: &str) -> Option<Value> {
    extract_object(text).map(|extraction| extraction.value)
}

/// Value-only facade over [`extract_array`].
pub fn parse_json_array(text: &str) -> Option<Vec<Value>> {
    extract_array(text).and_then(|extraction| match extraction.value {
        Value::Array(items) => Some(items),
        _ => None,
    })
}

enum Verdict {
    Accept(Extraction),
    NoData,
    WrongShape,
}

fn judge(extraction: Extraction, want_array: bool) -> Verdict {
    if matches!(&extraction.value, Value::Array(items) if items.is_empty()) {
        return Verdict::NoData;
    }
    let accepted = match &extraction.value {
        Value::Array(_) => true,
        Value::Object(_) => !want_array,
        _ => false,
    };
    if accepted {
        Verdict::Accept(extraction)
    } else {
        Verdict::WrongShape
    }
}

fn run_stages(text: &str, stages: &[(&str, Stage)], want_array: bool) -> Option<Extraction> {
    for &(name, stage) in stages {
        let miss = match stage(text) {
            Ok(extraction) => match judge(extraction, want_array) {
                Verdict::Accept(extraction) => return Some(extraction),
                Verdict::NoData => {
                    debug!(stage = name, "parsed an empty array, treating as no data");
                    return None;
                }
                Verdict::WrongShape => {
                    StageMiss::Parse("parsed value has the wrong shape".to_string())
                }
            },
            Err(miss) => miss,
        };
        debug!(
            stage = name,
            miss = %miss,
            snippet = %snippet(text),
            "extraction stage missed"
        );
    }
    None
}

fn markdown_stage(text: &str) -> Result<Extraction, StageMiss> {
    let block = locate::find_code_block(text).ok_or(StageMiss::Structural)?;
    parse_candidate(block, Provenance::Markdown)
}

fn raw_stage(text: &str) -> Result<Extraction, StageMiss> {
    let span = locate::find_bare_structure(text).ok_or(StageMiss::Structural)?;
    parse_candidate(&span, Provenance::Raw)
}

/// Last resort for object recovery: when the text at least looks like it
/// carries key/value pairs, salvage them as string attributes.
fn fallback_stage(text: &str) -> Result<Extraction, StageMiss> {
    if !(text.contains(':') && text.contains('"')) {
        return Err(StageMiss::Structural);
    }
    let attributes = salvage::extract_attributes(text);
    if attributes.is_empty() {
        return Err(StageMiss::Salvage);
    }
    let value = Value::Object(
        attributes
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect(),
    );
    Ok(Extraction {
        value,
        provenance: Provenance::Fallback,
    })
}

/// Shared parse path: accept a candidate that already parses, otherwise
/// normalize and parse strictly once.
fn parse_candidate(candidate: &str, provenance: Provenance) -> Result<Extraction, StageMiss> {
    if candidate.trim().is_empty() {
        return Err(StageMiss::Structural);
    }
    if let Some(value) = shape::parse_checked(candidate) {
        return Ok(Extraction { value, provenance });
    }
    let normalized = normalize_json_string(candidate);
    match serde_json::from_str(&normalized) {
        Ok(value) => Ok(Extraction { value, provenance }),
        Err(err) => Err(StageMiss::Parse(err.to_string())),
    }
}

fn snippet(text: &str) -> String {
    text.chars().take(SNIPPET_CHARS).collect()
}
