use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, Vue3ScanError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// OpenAI-compatible chat completion request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Chat completion transport, abstracted for testing.
pub trait CompletionClient {
    /// Send the request and return the first choice's message content.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status, or an unexpected body.
    fn complete(&self, request: &ChatRequest, api_key: &str) -> Result<String>;
}

/// Production client using blocking reqwest. One request, no retry.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    endpoint: String,
    timeout: Duration,
}

impl ReqwestClient {
    #[must_use]
    pub const fn new(endpoint: String, timeout_secs: u64) -> Self {
        Self {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[cfg(not(tarpaulin_include))]
impl CompletionClient for ReqwestClient {
    fn complete(&self, request: &ChatRequest, api_key: &str) -> Result<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Vue3ScanError::Advisor(format!("Failed to create HTTP client: {e}")))?;

        let url = &self.endpoint;
        let response = client
            .post(url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    Vue3ScanError::Advisor(format!("Request timeout calling {url}"))
                } else if e.is_connect() {
                    Vue3ScanError::Advisor(format!("Failed to connect to {url}"))
                } else {
                    Vue3ScanError::Advisor(format!("Request to {url} failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Vue3ScanError::Advisor(format!(
                "{url} returned HTTP {status}: {body}"
            )));
        }

        let body = response
            .text()
            .map_err(|e| Vue3ScanError::Advisor(format!("Failed to read response from {url}: {e}")))?;
        extract_content(&body)
    }
}

/// Pull the first choice's content out of a chat completion response body.
fn extract_content(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.trim().to_string())
        .ok_or_else(|| Vue3ScanError::Advisor("Response contained no choices".to_string()))
}
