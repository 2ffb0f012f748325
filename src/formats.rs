//! Report output formats
//!
//! Each formatter turns a [`Report`](crate::processor::Report) into text.
//! The registry maps CLI format names onto formatter instances.

pub mod json;
pub mod plain;
pub mod registry;
pub mod yaml;

pub use json::JsonFormatter;
pub use plain::PlainFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use yaml::YamlFormatter;
