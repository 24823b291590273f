//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout and are deserialized
//! directly by figment.

mod agent;
mod llm;
mod moltbook;

pub use agent::FileAgentConfig;
pub use llm::FileLlmConfig;
pub use moltbook::FileMoltbookConfig;

use super::credentials::Credentials;
use super::error::ConfigError;
use super::validation::{ConfigIssue, ConfigIssueCode};
use moltbot_application::RunParams;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Social API settings
    pub moltbook: FileMoltbookConfig,
    /// Chat-completions provider settings
    pub llm: FileLlmConfig,
    /// Agent behavior
    pub agent: FileAgentConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.moltbook.validate());
        issues.extend(self.llm.validate());
        issues.extend(self.agent.validate());
        issues
    }

    /// Resolve both API keys from the process environment.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        self.credentials_from(|name| std::env::var(name).ok())
    }

    /// Resolve both API keys with a custom environment lookup.
    ///
    /// Fails on the first missing key, Moltbook first.
    pub fn credentials_from<F>(&self, lookup: F) -> Result<Credentials, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let moltbook_api_key = resolve_key(
            self.moltbook.api_key.as_deref(),
            &self.moltbook.api_key_env,
            &lookup,
        )
        .ok_or_else(|| ConfigError::MissingCredential {
            service: "Moltbook",
            env_var: self.moltbook.api_key_env.clone(),
        })?;

        let llm_api_key = resolve_key(self.llm.api_key.as_deref(), &self.llm.api_key_env, &lookup)
            .ok_or_else(|| ConfigError::MissingCredential {
                service: "LLM",
                env_var: self.llm.api_key_env.clone(),
            })?;

        Ok(Credentials {
            moltbook_api_key,
            llm_api_key,
        })
    }

    /// Build the run parameters this configuration describes.
    ///
    /// An unparseable model falls back to the default; [`validate`](Self::validate)
    /// reports it.
    pub fn to_run_params(&self) -> RunParams {
        let defaults = RunParams::default();
        RunParams {
            agent_name: self.agent.name.clone(),
            model: self.llm.model.parse().unwrap_or(defaults.model),
            temperature: self.llm.temperature,
            max_tokens: self.llm.max_tokens,
            feed_limit: self.agent.feed_limit,
            max_prompt_posts: self.agent.max_prompt_posts,
            max_content_chars: self.agent.content_max_chars,
            submolt: self.agent.submolt.clone(),
            own_posts_limit: self.agent.own_posts_limit,
            dry_run: defaults.dry_run,
        }
    }

    /// Copy with inline API keys masked, for display.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.moltbook.api_key.is_some() {
            copy.moltbook.api_key = Some("<redacted>".to_string());
        }
        if copy.llm.api_key.is_some() {
            copy.llm.api_key = Some("<redacted>".to_string());
        }
        copy
    }
}

/// Inline key wins over the environment; blank values count as missing.
fn resolve_key<F>(inline: Option<&str>, env_var: &str, lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    inline
        .map(str::to_string)
        .or_else(|| lookup(env_var))
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

pub(super) fn check_not_empty(field: &str, value: &str) -> Option<ConfigIssue> {
    value.trim().is_empty().then(|| {
        ConfigIssue::error(
            ConfigIssueCode::EmptyValue {
                field: field.to_string(),
            },
            format!("{} must not be empty", field),
        )
    })
}

pub(super) fn check_url(field: &str, value: &str) -> Option<ConfigIssue> {
    if value.starts_with("http://") || value.starts_with("https://") {
        return None;
    }
    Some(ConfigIssue::error(
        ConfigIssueCode::InvalidUrl {
            field: field.to_string(),
            value: value.to_string(),
        },
        format!("{}: '{}' is not an http(s) URL", field, value),
    ))
}

pub(super) fn check_inline_secret(field: &str, value: Option<&str>) -> Option<ConfigIssue> {
    value.map(|_| {
        ConfigIssue::warning(
            ConfigIssueCode::InlineSecret {
                field: field.to_string(),
            },
            format!("{} is set in the config file; prefer the environment", field),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::Severity;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[moltbook]
base_url = "http://localhost:8080/api/v1"
timeout_secs = 5

[llm]
model = "mixtral-8x7b"
temperature = 0.5
max_tokens = 256

[agent]
name = "Ruin"
submolt = "philosophy"
feed_limit = 20
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.moltbook.base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.moltbook.timeout_secs, 5);
        assert_eq!(config.llm.model, "mixtral-8x7b");
        assert_eq!(config.agent.name, "Ruin");
        assert_eq!(config.agent.feed_limit, 20);
        // Defaults should apply
        assert_eq!(config.moltbook.api_key_env, "MOLTBOOK_API_KEY");
        assert_eq!(config.agent.content_max_chars, 500);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_to_run_params() {
        let mut config = FileConfig::default();
        config.llm.model = "gemma2-9b-it".to_string();
        config.agent.submolt = "philosophy".to_string();

        let params = config.to_run_params();
        assert_eq!(params.model.as_str(), "gemma2-9b-it");
        assert_eq!(params.submolt, "philosophy");
        assert_eq!(params.temperature, 0.8);
        assert_eq!(params.max_tokens, 500);
        assert_eq!(params.feed_limit, 10);
    }

    #[test]
    fn test_credentials_from_env() {
        let credentials = FileConfig::default()
            .credentials_from(env(&[("MOLTBOOK_API_KEY", "mb"), ("GROQ_API_KEY", "gsk")]))
            .unwrap();
        assert_eq!(credentials.moltbook_api_key, "mb");
        assert_eq!(credentials.llm_api_key, "gsk");
    }

    #[test]
    fn test_missing_moltbook_key() {
        let err = FileConfig::default()
            .credentials_from(env(&[("GROQ_API_KEY", "gsk")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingCredential { service: "Moltbook", ref env_var } if env_var == "MOLTBOOK_API_KEY"
        ));
    }

    #[test]
    fn test_blank_llm_key_is_missing() {
        let err = FileConfig::default()
            .credentials_from(env(&[("MOLTBOOK_API_KEY", "mb"), ("GROQ_API_KEY", "  ")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing API key for LLM: set GROQ_API_KEY");
    }

    #[test]
    fn test_inline_key_and_custom_env_name() {
        let mut config = FileConfig::default();
        config.moltbook.api_key = Some("inline".to_string());
        config.llm.api_key_env = "OPENAI_API_KEY".to_string();

        let credentials = config
            .credentials_from(env(&[("OPENAI_API_KEY", "sk")]))
            .unwrap();
        assert_eq!(credentials.moltbook_api_key, "inline");
        assert_eq!(credentials.llm_api_key, "sk");

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_redacted_masks_inline_keys() {
        let mut config = FileConfig::default();
        config.llm.api_key = Some("gsk-live".to_string());
        let redacted = config.redacted();
        assert_eq!(redacted.llm.api_key.as_deref(), Some("<redacted>"));
        assert!(redacted.moltbook.api_key.is_none());
    }
}
