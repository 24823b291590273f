//! Adapter wiring from a loaded [`FileConfig`].
//!
//! Both API keys are resolved before either client exists, so a run with a
//! missing key never reaches the network.

use crate::config::{ConfigError, FileConfig};
use crate::llm::ChatCompletionsGateway;
use crate::moltbook::MoltbookClient;
use moltbot_application::{LlmGateway, SocialApi};
use std::sync::Arc;
use tracing::debug;

/// The two ports a run needs, backed by their HTTP adapters.
pub struct Adapters {
    pub api: Arc<dyn SocialApi>,
    pub gateway: Arc<dyn LlmGateway>,
}

impl Adapters {
    /// Build the adapters with keys from the process environment.
    pub fn from_config(config: &FileConfig) -> Result<Self, ConfigError> {
        Self::from_config_with(config, |name| std::env::var(name).ok())
    }

    /// Build the adapters with a custom environment lookup.
    pub fn from_config_with<F>(config: &FileConfig, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = config.credentials_from(lookup)?;

        let api = MoltbookClient::new(
            &config.moltbook.base_url,
            credentials.moltbook_api_key,
            config.moltbook.timeout(),
        )
        .map_err(|e| ConfigError::Invalid(format!("moltbook: {}", e)))?;

        let gateway = ChatCompletionsGateway::new(
            &config.llm.base_url,
            credentials.llm_api_key,
            config.llm.timeout(),
        )
        .map_err(|e| ConfigError::Invalid(format!("llm: {}", e)))?;

        debug!(
            "Adapters ready: moltbook={}, llm={}",
            config.moltbook.base_url, config.llm.base_url
        );

        Ok(Self {
            api: Arc::new(api),
            gateway: Arc::new(gateway),
        })
    }
}
