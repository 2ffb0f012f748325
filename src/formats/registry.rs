//! Formatter registry
//!
//! Output formats are looked up by name at runtime so the CLI can accept
//! `--format yaml` without a compile-time switch. New formatters register
//! through [`FormatRegistry::register`].

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use crate::processor::Report;

/// Errors raised while rendering a report.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No formatter registered under the requested name.
    FormatNotFound(String),
    /// The formatter itself failed to serialize the report.
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "unknown output format: {name}"),
            FormatError::SerializationError(msg) => write!(f, "failed to render report: {msg}"),
        }
    }
}

impl Error for FormatError {}

/// Renders a [`Report`] into a textual representation.
pub trait Formatter: Send + Sync {
    /// Name the formatter is registered under.
    fn name(&self) -> &str;

    /// Render the report.
    fn format(&self, report: &Report) -> Result<String, FormatError>;

    /// One-line description for help listings.
    fn description(&self) -> &str {
        ""
    }
}

/// Name-indexed collection of formatters.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// An empty registry.
    pub fn new() -> FormatRegistry {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// A registry preloaded with the built-in formatters.
    pub fn with_defaults() -> FormatRegistry {
        let mut registry = FormatRegistry::new();
        registry.register(super::json::JsonFormatter);
        registry.register(super::yaml::YamlFormatter);
        registry.register(super::plain::PlainFormatter);
        registry
    }

    /// Add a formatter under its own name.
    ///
    /// A formatter registered under an existing name replaces the old one.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Look up a formatter by name.
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Whether a formatter is registered under `name`.
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Render `report` with the named formatter.
    pub fn format(&self, report: &Report, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.format(report)
    }

    /// Registered format names, sorted for stable listings.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<String> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for FormatRegistry {
    fn default() -> FormatRegistry {
        FormatRegistry::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestFormatter;

    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }

        fn format(&self, report: &Report) -> Result<String, FormatError> {
            Ok(format!("mode={} found={}", report.mode, report.found))
        }

        fn description(&self) -> &str {
            "test formatter"
        }
    }

    fn sample_report() -> Report {
        Report {
            mode: "object".to_string(),
            found: false,
            provenance: None,
            value: None,
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);
        assert!(registry.has("test"));
        assert!(registry.get("test").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_format_via_registry() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);
        let out = registry.format(&sample_report(), "test").unwrap();
        assert_eq!(out, "mode=object found=false");
    }

    #[test]
    fn test_unknown_format_error() {
        let registry = FormatRegistry::new();
        let err = registry.format(&sample_report(), "nope").unwrap_err();
        assert_eq!(err, FormatError::FormatNotFound("nope".to_string()));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_defaults_include_builtins() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.list_formats(), vec!["json", "plain", "yaml"]);
    }

    #[test]
    fn test_list_formats_sorted() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);
        let mut names = registry.list_formats();
        names.sort();
        assert_eq!(names, registry.list_formats());
    }

    #[test]
    fn test_description_default_is_empty() {
        struct Bare;
        impl Formatter for Bare {
            fn name(&self) -> &str {
                "bare"
            }
            fn format(&self, _report: &Report) -> Result<String, FormatError> {
                Ok(String::new())
            }
        }
        assert_eq!(Bare.description(), "");
    }
}
