//! Agent behavior configuration (`[agent]` section)

use super::check_not_empty;
use crate::config::validation::{ConfigIssue, ConfigIssueCode};
use moltbot_domain::PersonaPrompt;
use moltbot_domain::prompt::{MAX_CONTENT_CHARS, MAX_PROMPT_POSTS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// Name the persona uses for itself.
    pub name: String,
    /// `limit` sent with the hot-feed request.
    pub feed_limit: usize,
    /// Most posts shown to the model.
    pub max_prompt_posts: usize,
    /// Longest post body shown to the model, in characters.
    pub content_max_chars: usize,
    /// Category new posts are created in.
    pub submolt: String,
    /// `limit` for `--my-posts`.
    pub own_posts_limit: usize,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        Self {
            name: PersonaPrompt::DEFAULT_AGENT_NAME.to_string(),
            feed_limit: 10,
            max_prompt_posts: MAX_PROMPT_POSTS,
            content_max_chars: MAX_CONTENT_CHARS,
            submolt: "general".to_string(),
            own_posts_limit: 5,
        }
    }
}

impl FileAgentConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(check_not_empty("agent.name", &self.name));
        issues.extend(check_not_empty("agent.submolt", &self.submolt));

        for (field, value) in [
            ("agent.feed_limit", self.feed_limit),
            ("agent.max_prompt_posts", self.max_prompt_posts),
            ("agent.own_posts_limit", self.own_posts_limit),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::OutOfRange {
                        field: field.to_string(),
                        value: "0".to_string(),
                    },
                    format!("{} must be at least 1", field),
                ));
            }
        }

        if self.max_prompt_posts > self.feed_limit {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "agent.max_prompt_posts".to_string(),
                    value: self.max_prompt_posts.to_string(),
                },
                format!(
                    "agent.max_prompt_posts ({}) exceeds agent.feed_limit ({}); at most {} posts will be shown",
                    self.max_prompt_posts, self.feed_limit, self.feed_limit
                ),
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_feed_limit_is_error() {
        let config = FileAgentConfig {
            feed_limit: 0,
            ..Default::default()
        };
        let issues = config.validate();
        assert!(issues.iter().any(|i| i.is_error()
            && i.code
                == ConfigIssueCode::OutOfRange {
                    field: "agent.feed_limit".to_string(),
                    value: "0".to_string()
                }));
    }

    #[test]
    fn test_prompt_posts_above_feed_limit_warns() {
        let config = FileAgentConfig {
            feed_limit: 5,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_empty_submolt_is_error() {
        let config = FileAgentConfig {
            submolt: String::new(),
            ..Default::default()
        };
        assert!(config.validate().iter().any(ConfigIssue::is_error));
    }
}
