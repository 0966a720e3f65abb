//! AI-assisted migration advice for a single file.
//!
//! Advisory only: every failure (missing key, network, malformed reply) is
//! logged as a warning and reported as "no findings".

mod client;
mod prompt;

pub use client::{ChatMessage, ChatRequest, CompletionClient, ReqwestClient};

use serde::{Deserialize, Serialize};

use crate::config::AdvisorConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[serde(alias = "High", alias = "HIGH")]
    High,
    #[serde(alias = "Medium", alias = "MEDIUM")]
    Medium,
    #[serde(alias = "Low", alias = "LOW")]
    Low,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// One suggested migration edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub issue: String,
    pub severity: Severity,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub before: String,
    #[serde(default)]
    pub after: String,
    #[serde(default)]
    pub explanation: String,
}

pub struct Advisor<C: CompletionClient> {
    client: C,
    config: AdvisorConfig,
    api_key: Option<String>,
}

impl Advisor<ReqwestClient> {
    /// Production advisor; the API key is read from `config.api_key_env`.
    #[must_use]
    pub fn from_config(config: AdvisorConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());
        let client = ReqwestClient::new(config.endpoint.clone(), config.timeout_secs);
        Self::new(client, config, api_key)
    }
}

impl<C: CompletionClient> Advisor<C> {
    #[must_use]
    pub const fn new(client: C, config: AdvisorConfig, api_key: Option<String>) -> Self {
        Self {
            client,
            config,
            api_key,
        }
    }

    /// Ask the model for migration suggestions. Never fails; errors yield an empty list.
    #[must_use]
    pub fn advise(&self, content: &str) -> Vec<Suggestion> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!(
                env = %self.config.api_key_env,
                "advisor API key is not set, skipping analysis"
            );
            return Vec::new();
        };

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(prompt::SYSTEM_PROMPT),
                ChatMessage::user(prompt::user_prompt(content)),
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            top_p: 1.0,
            stream: false,
        };

        let reply = match self.client.complete(&request, api_key) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "advisor request failed");
                return Vec::new();
            }
        };

        parse_suggestions(&reply).unwrap_or_else(|| {
            tracing::warn!("could not parse advisor response as a JSON array");
            Vec::new()
        })
    }
}

/// Parse a model reply into suggestions.
///
/// Tries the whole reply first, then the span from the first `[` to the last `]`.
#[must_use]
pub fn parse_suggestions(reply: &str) -> Option<Vec<Suggestion>> {
    let reply = reply.trim();
    if let Ok(suggestions) = serde_json::from_str(reply) {
        return Some(suggestions);
    }

    tracing::debug!("advisor reply is not bare JSON, extracting bracketed span");
    let start = reply.find('[')?;
    let end = reply.rfind(']')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&reply[start..=end]).ok()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
