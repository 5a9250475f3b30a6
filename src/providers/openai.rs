// OpenAI chat-completions provider
//
// Works against api.openai.com or any endpoint speaking the same format
// (set `base_url` in the config for self-hosted gateways).

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::types::{CompletionRequest, CompletionResponse, TokenUsage};
use super::CompletionProvider;

const OPENAI_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o";

/// Maximum bytes of an upstream error body carried into our error message
const ERROR_BODY_LIMIT: usize = 500;

#[derive(Clone)]
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    default_model: String,
    timeout_secs: u64,
}

impl OpenAiProvider {
    pub fn new(api_key: String, base_url: Option<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| OPENAI_BASE_URL.to_string()),
            default_model: DEFAULT_MODEL.to_string(),
            timeout_secs,
        })
    }

    /// Set custom model for this provider
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Request timeout applied to every completion call
    pub fn request_timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    fn to_wire_request(&self, request: &CompletionRequest) -> WireRequest {
        let model = if request.model.is_empty() {
            self.default_model.clone()
        } else {
            request.model.clone()
        };

        let mut messages = Vec::new();
        if let Some(system) = &request.system {
            messages.push(WireMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }
        messages.push(WireMessage {
            role: "user".to_string(),
            content: request.user.clone(),
        });

        WireRequest { model, messages }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    // Exactly one attempt per request: a failed upstream call surfaces to
    // the caller rather than being retried.
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let wire_request = self.to_wire_request(request);

        tracing::debug!(model = %wire_request.model, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&wire_request)
            .send()
            .await
            .context("Failed to send request to completion API")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Completion API request failed\n\nStatus: {}\nBody: {}",
                status,
                truncate_on_char_boundary(&error_body, ERROR_BODY_LIMIT)
            );
        }

        let wire_response: WireResponse = response
            .json()
            .await
            .context("Failed to parse completion API response")?;

        let text = wire_response
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .context("Completion API response contained no choices")?;

        Ok(CompletionResponse {
            text,
            model: wire_response.model,
            usage: wire_response.usage.unwrap_or_default(),
        })
    }

    fn name(&self) -> &str {
        "openai"
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }
}

/// Truncate to at most `limit` bytes without splitting a UTF-8 character
fn truncate_on_char_boundary(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

// -- Wire types --

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    model: String,
    choices: Vec<WireChoice>,
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireMessage,
}
