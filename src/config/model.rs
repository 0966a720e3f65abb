use serde::{Deserialize, Serialize};

use crate::classifier::{DEFAULT_MODULE_PATTERN, ModuleClassifier, ModuleFallback};
use crate::error::Result;

/// Top-level configuration (`.vue3-scan.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub modules: ModulesConfig,

    #[serde(default)]
    pub advisor: AdvisorConfig,
}

/// File discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// File extensions to scan.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns that are never scanned.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Respect .gitignore rules.
    #[serde(default)]
    pub gitignore: bool,

    /// Restrict scanning to these sub-folders of the root (empty = everything).
    #[serde(default)]
    pub whitelist: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: default_exclude(),
            gitignore: false,
            whitelist: Vec::new(),
        }
    }
}

/// Module grouping convention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ModulesConfig {
    /// Regex whose first capture group names the module.
    #[serde(default = "default_module_pattern")]
    pub pattern: String,

    /// Handling of files that do not match `pattern`.
    #[serde(default)]
    pub fallback: ModuleFallback,
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            pattern: default_module_pattern(),
            fallback: ModuleFallback::Pool,
        }
    }
}

impl ModulesConfig {
    /// # Errors
    /// Returns an error if `pattern` is invalid or lacks a capture group.
    pub fn classifier(&self) -> Result<ModuleClassifier> {
        ModuleClassifier::new(&self.pattern, self.fallback)
    }
}

/// Settings for the AI-assisted migration advisor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AdvisorConfig {
    /// OpenAI-compatible chat completions endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["vue".to_string(), "js".to_string()]
}

fn default_exclude() -> Vec<String> {
    vec!["**/node_modules/**".to_string(), "**/dist/**".to_string()]
}

fn default_module_pattern() -> String {
    DEFAULT_MODULE_PATTERN.to_string()
}

fn default_endpoint() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_api_key_env() -> String {
    "GROQ_API_KEY".to_string()
}

const fn default_temperature() -> f32 {
    0.1
}

const fn default_max_tokens() -> u32 {
    2048
}

const fn default_timeout_secs() -> u64 {
    30
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
