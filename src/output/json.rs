use crate::aggregate::GlobalAggregate;
use crate::error::Result;

use super::OutputFormatter;

/// Serializes the full aggregate as pretty-printed JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter;

impl JsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &GlobalAggregate) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
