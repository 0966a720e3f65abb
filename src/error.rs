use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Vue3ScanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid detection rule: {pattern}")]
    InvalidRule {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Scan root is not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Advisor error: {0}")]
    Advisor(String),
}

impl Vue3ScanError {
    /// Short, stable name of the error kind for diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::InvalidRule { .. } => "InvalidRule",
            Self::InvalidRoot(_) => "InvalidRoot",
            Self::Io(_) => "IO",
            Self::Json(_) => "JSON",
            Self::Advisor(_) => "Advisor",
        }
    }

    /// Whether the error stems from configuration rather than the scanned project.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::TomlParse(_) | Self::InvalidPattern { .. } | Self::InvalidRule { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Vue3ScanError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
