//! YAML report output

use super::registry::{FormatError, Formatter};
use crate::processor::Report;

/// Renders reports as YAML documents.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn format(&self, report: &Report) -> Result<String, FormatError> {
        serde_yaml::to_string(report).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML report"
    }
}
