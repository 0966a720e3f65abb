mod advice;
mod json;
mod progress;
mod text;

pub use advice::format_advice;
pub use json::JsonFormatter;
pub use progress::ScanProgress;
pub use text::{ColorMode, ReportOptions, TextFormatter};

use crate::aggregate::GlobalAggregate;
use crate::error::Result;

/// Trait for rendering a scan report.
pub trait OutputFormatter {
    /// Format the aggregated statistics into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &GlobalAggregate) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
