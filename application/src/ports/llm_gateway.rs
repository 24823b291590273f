//! LLM Gateway port
//!
//! Defines the interface for asking a chat-completion provider for text.

use async_trait::async_trait;
use moltbot_domain::Model;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Completion contained no choices")]
    NoChoices,
}

/// One single-turn chat completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: Model,
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Gateway for LLM communication
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Request one completion and return its text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
