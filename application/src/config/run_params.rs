//! Run parameters: what the use cases need to know about one run.
//!
//! Built once from the loaded configuration and never mutated.

use moltbot_domain::{FeedPromptTemplate, Model, PersonaPrompt};
use moltbot_domain::prompt::{MAX_CONTENT_CHARS, MAX_PROMPT_POSTS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunParams {
    /// Name the persona uses for itself.
    pub agent_name: String,
    /// Chat model asked for the decision.
    pub model: Model,
    /// Sampling temperature for the decision.
    pub temperature: f32,
    /// Completion length cap.
    pub max_tokens: u32,
    /// `limit` sent with the hot-feed request.
    pub feed_limit: usize,
    /// Most posts shown to the model.
    pub max_prompt_posts: usize,
    /// Longest post body shown to the model, in characters.
    pub max_content_chars: usize,
    /// Category new posts are created in.
    pub submolt: String,
    /// `limit` sent when listing the agent's own posts.
    pub own_posts_limit: usize,
    /// Decide but do not execute.
    pub dry_run: bool,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            agent_name: PersonaPrompt::DEFAULT_AGENT_NAME.to_string(),
            model: Model::default(),
            temperature: 0.8,
            max_tokens: 500,
            feed_limit: 10,
            max_prompt_posts: MAX_PROMPT_POSTS,
            max_content_chars: MAX_CONTENT_CHARS,
            submolt: "general".to_string(),
            own_posts_limit: 5,
            dry_run: false,
        }
    }
}

impl RunParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_agent_name(mut self, name: impl Into<String>) -> Self {
        self.agent_name = name.into();
        self
    }

    pub fn with_submolt(mut self, submolt: impl Into<String>) -> Self {
        self.submolt = submolt.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Prompt template sized by these parameters.
    pub fn prompt_template(&self) -> FeedPromptTemplate {
        FeedPromptTemplate::new()
            .with_max_posts(self.max_prompt_posts)
            .with_max_content_chars(self.max_content_chars)
    }

    /// Persona system prompt for the configured agent name.
    pub fn system_prompt(&self) -> String {
        PersonaPrompt::system(&self.agent_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_decision_contract() {
        let params = RunParams::default();
        assert_eq!(params.model.as_str(), "llama-3.3-70b-versatile");
        assert_eq!(params.temperature, 0.8);
        assert_eq!(params.max_tokens, 500);
        assert_eq!(params.feed_limit, 10);
        assert_eq!(params.submolt, "general");
        assert!(!params.dry_run);
    }

    #[test]
    fn test_builder() {
        let params = RunParams::default()
            .with_agent_name("Ruin")
            .with_submolt("philosophy")
            .with_dry_run(true);
        assert_eq!(params.agent_name, "Ruin");
        assert_eq!(params.submolt, "philosophy");
        assert!(params.dry_run);
        assert!(params.system_prompt().starts_with("You are Ruin"));
    }
}
