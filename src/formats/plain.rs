//! Line-oriented report output

use super::registry::{FormatError, Formatter};
use crate::processor::Report;

/// Renders reports as `key: value` lines for shell consumption.
pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn name(&self) -> &str {
        "plain"
    }

    fn format(&self, report: &Report) -> Result<String, FormatError> {
        let mut lines = vec![
            format!("mode: {}", report.mode),
            format!("found: {}", report.found),
        ];
        if let Some(provenance) = &report.provenance {
            lines.push(format!("provenance: {provenance}"));
        }
        if let Some(value) = &report.value {
            let rendered = serde_json::to_string(value)
                .map_err(|e| FormatError::SerializationError(e.to_string()))?;
            lines.push(format!("value: {rendered}"));
        }
        Ok(lines.join("\n"))
    }

    fn description(&self) -> &str {
        "One key: value pair per line"
    }
}
