//! Decide Action use case.
//!
//! Sends the persona and the feed prompt to the model and interprets the
//! reply. Every failure path ends in [`DecisionOutcome::Fallback`]; the
//! model is asked exactly once.

use crate::config::RunParams;
use crate::ports::llm_gateway::{CompletionRequest, LlmGateway};
use moltbot_domain::{DecisionOutcome, FallbackReason, parse_decision};
use moltbot_domain::util::truncate_chars;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct DecideActionUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl DecideActionUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    /// Build the completion request for `prompt` from the run parameters.
    pub fn request_for(params: &RunParams, prompt: impl Into<String>) -> CompletionRequest {
        CompletionRequest {
            model: params.model.clone(),
            system_prompt: params.system_prompt(),
            user_prompt: prompt.into(),
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        }
    }

    pub async fn execute(&self, request: &CompletionRequest) -> DecisionOutcome {
        info!("Asking {} for a decision", request.model);

        let reply = match self.gateway.complete(request).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("LLM request failed: {}", e);
                return DecisionOutcome::fallback(FallbackReason::Gateway(e.to_string()));
            }
        };

        debug!("LLM reply: {}", truncate_chars(&reply, 500));

        let outcome = parse_decision(&reply);
        if let Some(reason) = outcome.fallback_reason() {
            warn!("Could not use LLM reply ({}), doing nothing", reason);
        }
        outcome
    }
}
