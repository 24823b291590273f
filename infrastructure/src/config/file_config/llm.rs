//! Chat-completions provider configuration (`[llm]` section)

use super::{check_inline_secret, check_not_empty, check_url};
use crate::config::validation::{ConfigIssue, ConfigIssueCode};
use crate::llm::ChatCompletionsGateway;
use moltbot_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Base URL of an OpenAI-compatible API (default: Groq).
    pub base_url: String,
    /// Environment variable holding the API key (default: "GROQ_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature (0.0 - 2.0).
    pub temperature: f32,
    /// Completion length cap.
    pub max_tokens: u32,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            base_url: ChatCompletionsGateway::DEFAULT_BASE_URL.to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            api_key: None,
            model: Model::DEFAULT.to_string(),
            temperature: 0.8,
            max_tokens: 500,
            timeout_secs: 60,
        }
    }
}

impl FileLlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(check_url("llm.base_url", &self.base_url));
        issues.extend(check_not_empty("llm.api_key_env", &self.api_key_env));
        issues.extend(check_not_empty("llm.model", &self.model));
        issues.extend(check_inline_secret("llm.api_key", self.api_key.as_deref()));

        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(out_of_range(
                "llm.temperature",
                self.temperature.to_string(),
                "must be between 0.0 and 2.0",
            ));
        }
        if self.max_tokens == 0 {
            issues.push(out_of_range("llm.max_tokens", "0".to_string(), "must be at least 1"));
        }
        if self.timeout_secs == 0 {
            issues.push(out_of_range("llm.timeout_secs", "0".to_string(), "must be at least 1"));
        }
        issues
    }
}

fn out_of_range(field: &str, value: String, rule: &str) -> ConfigIssue {
    let message = format!("{}: {} {}", field, value, rule);
    ConfigIssue::error(
        ConfigIssueCode::OutOfRange {
            field: field.to_string(),
            value,
        },
        message,
    )
}
