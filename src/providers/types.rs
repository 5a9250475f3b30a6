// Provider request/response types

use serde::{Deserialize, Serialize};

/// A single completion request: one optional system prompt plus user text
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model identifier; empty string means "use the provider default"
    pub model: String,
    /// System prompt prepended to the conversation
    pub system: Option<String>,
    /// User message content
    pub user: String,
}

impl CompletionRequest {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            model: String::new(),
            system: None,
            user: user.into(),
        }
    }

    /// Set the system prompt
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Completion result with the text and token accounting
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Assistant reply text, trimmed
    pub text: String,
    /// Model that produced the reply
    pub model: String,
    /// Token usage reported by the API
    pub usage: TokenUsage,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}
