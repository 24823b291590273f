//! [`LlmGateway`] over an OpenAI-compatible `/chat/completions` endpoint.

use crate::http::{HttpTransport, TransportError};
use async_trait::async_trait;
use moltbot_application::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl<'a> From<&'a CompletionRequest> for ChatRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: request.model.as_str(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

impl From<TransportError> for GatewayError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Timeout(_) => GatewayError::Timeout,
            TransportError::Connection(msg) => GatewayError::ConnectionError(msg),
            TransportError::InvalidBody { status, message } => {
                GatewayError::InvalidResponse(format!("HTTP {}: {}", status, message))
            }
            other => GatewayError::RequestFailed(other.to_string()),
        }
    }
}

pub struct ChatCompletionsGateway {
    transport: HttpTransport,
}

impl ChatCompletionsGateway {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.groq.com/openai/v1";

    pub fn new(
        base_url: impl AsRef<str>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        Ok(Self {
            transport: HttpTransport::new(base_url, api_key, timeout)?,
        })
    }
}

#[async_trait]
impl LlmGateway for ChatCompletionsGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let body = ChatRequest::from(request);
        let response = self.transport.post(&["chat", "completions"], &body).await?;

        if !response.status.is_success() {
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                response.status.as_u16(),
                response.body
            )));
        }

        let parsed: ChatResponse = serde_json::from_value(response.body)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(GatewayError::NoChoices)?
            .message
            .content
            .unwrap_or_default();

        debug!("Completion: {} chars", content.chars().count());
        Ok(content)
    }
}
