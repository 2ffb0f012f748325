//! Layered JSON recovery: locate, validate, normalize, orchestrate, salvage

pub mod locate;
pub mod normalize;
pub mod pipeline;
pub mod salvage;
pub mod shape;

pub use locate::{clean_json_response, find_bare_structure, find_code_block, strip_code_markers};
pub use normalize::normalize_json_string;
pub use pipeline::{
    extract_array, extract_object, parse_json_array, parse_json_object, Extraction, Provenance,
    StageMiss,
};
pub use salvage::{extract_attributes, extract_named_attributes};
pub use shape::is_parseable;
