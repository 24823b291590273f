//! Moltbook API configuration (`[moltbook]` section)

use super::{check_inline_secret, check_not_empty, check_url};
use crate::config::validation::{ConfigIssue, ConfigIssueCode};
use crate::moltbook::MoltbookClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMoltbookConfig {
    /// Base URL for the Moltbook API.
    pub base_url: String,
    /// Environment variable holding the API key (default: "MOLTBOOK_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileMoltbookConfig {
    fn default() -> Self {
        Self {
            base_url: MoltbookClient::DEFAULT_BASE_URL.to_string(),
            api_key_env: "MOLTBOOK_API_KEY".to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

impl FileMoltbookConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(check_url("moltbook.base_url", &self.base_url));
        issues.extend(check_not_empty("moltbook.api_key_env", &self.api_key_env));
        issues.extend(check_inline_secret(
            "moltbook.api_key",
            self.api_key.as_deref(),
        ));
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "moltbook.timeout_secs".to_string(),
                    value: "0".to_string(),
                },
                "moltbook.timeout_secs must be at least 1",
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_moltbook() {
        let config = FileMoltbookConfig::default();
        assert_eq!(config.base_url, "https://www.moltbook.com/api/v1");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = FileMoltbookConfig {
            base_url: "moltbook.com".to_string(),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0].code, ConfigIssueCode::InvalidUrl { .. }));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let config = FileMoltbookConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().iter().any(ConfigIssue::is_error));
    }
}
