//! JSON report output

use super::registry::{FormatError, Formatter};
use crate::processor::Report;

/// Renders reports as pretty-printed JSON.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn format(&self, report: &Report) -> Result<String, FormatError> {
        serde_json::to_string_pretty(report)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON report"
    }
}
