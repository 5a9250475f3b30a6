// Completion provider abstraction
//
// The summarization pipeline talks to a chat-completion API through this
// trait, keeping the HTTP wire format out of the core logic and letting
// tests substitute a canned backend.

use anyhow::Result;
use async_trait::async_trait;

mod openai;
pub mod types;

pub use openai::OpenAiProvider;
pub use types::{CompletionRequest, CompletionResponse, TokenUsage};

/// Trait for chat-completion providers
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send a completion request and wait for the full response
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse>;

    /// Get the provider name (e.g., "openai")
    fn name(&self) -> &str;

    /// Get the default model for this provider
    fn default_model(&self) -> &str;
}
