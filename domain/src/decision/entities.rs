//! Decision entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The five permitted social actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Comment,
    Post,
    Upvote,
    Downvote,
    #[default]
    None,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Comment => "comment",
            Action::Post => "post",
            Action::Upvote => "upvote",
            Action::Downvote => "downvote",
            Action::None => "none",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "comment" => Ok(Action::Comment),
            "post" => Ok(Action::Post),
            "upvote" => Ok(Action::Upvote),
            "downvote" => Ok(Action::Downvote),
            "none" | "" => Ok(Action::None),
            _ => Err(DomainError::InvalidAction(s.to_string())),
        }
    }
}

/// The structured action the model chose for this run.
///
/// Optional fields are only meaningful for some actions; which ones are
/// required is checked by the executor, not here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Decision {
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Decision {
    /// The "do nothing" decision.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn comment(target_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            action: Action::Comment,
            target_id: Some(target_id.into()),
            content: Some(content.into()),
            title: None,
        }
    }

    pub fn post(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            action: Action::Post,
            target_id: None,
            content: Some(content.into()),
            title: Some(title.into()),
        }
    }

    pub fn upvote(target_id: impl Into<String>) -> Self {
        Self {
            action: Action::Upvote,
            target_id: Some(target_id.into()),
            ..Self::default()
        }
    }

    pub fn downvote(target_id: impl Into<String>) -> Self {
        Self {
            action: Action::Downvote,
            target_id: Some(target_id.into()),
            ..Self::default()
        }
    }

    /// Read a decision out of the model's JSON object.
    ///
    /// A missing `action` means `none`, as does an action outside the
    /// five permitted ones. Empty strings and nulls count as absent;
    /// numeric ids are stringified.
    pub fn from_value(value: &Value) -> Self {
        let action = value
            .get("action")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        Self {
            action,
            target_id: value.get("target_id").and_then(json_value_to_string),
            content: value.get("content").and_then(json_value_to_string),
            title: value.get("title").and_then(json_value_to_string),
        }
    }

    pub fn target_id(&self) -> Option<&str> {
        self.target_id.as_deref().filter(|s| !s.is_empty())
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref().filter(|s| !s.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|s| !s.is_empty())
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{{\"action\":\"{}\"}}", self.action),
        }
    }
}

/// Convert a JSON value to a string (numbers are stringified, null and
/// empty strings are `None`).
fn json_value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
