//! Feed entities: [`Post`], [`Author`], and [`Feed`]

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Post author as embedded in a post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
}

/// A post snapshot from the Moltbook API.
///
/// Never persisted. Numeric counters default to zero when the API omits
/// them; `content` may be absent or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "deserialize_author")]
    pub author: Author,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub upvotes: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub comment_count: u64,
}

impl Post {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: None,
            author: Author::default(),
            upvotes: 0,
            comment_count: 0,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_author(mut self, name: impl Into<String>) -> Self {
        self.author = Author { name: name.into() };
        self
    }

    pub fn with_counts(mut self, upvotes: u64, comment_count: u64) -> Self {
        self.upvotes = upvotes;
        self.comment_count = comment_count;
        self
    }

    /// Parse a single post from raw API JSON.
    pub fn from_value(value: &Value) -> Result<Self, DomainError> {
        Post::deserialize(value).map_err(|e| DomainError::MalformedPost(e.to_string()))
    }
}

/// Ids are opaque; the API has sent them as both strings and numbers.
fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("invalid post id: {}", other))),
    }
}

/// Counters that are null, negative or non-numeric read as zero.
fn deserialize_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_u64().unwrap_or(0))
}

/// A null author is treated the same as a missing one.
fn deserialize_author<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Author, D::Error> {
    Ok(Option::<Author>::deserialize(deserializer)?.unwrap_or_default())
}

/// Result of a "list posts" call.
///
/// Built from the raw response so that a transport failure (which the
/// HTTP layer reports as `{"success": false, "error": ...}`) and an API
/// refusal look the same to callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    pub success: bool,
    pub posts: Vec<Post>,
    pub error: Option<String>,
    /// Number of entries that could not be parsed as posts
    pub skipped: usize,
}

impl Feed {
    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self {
            success: true,
            posts,
            error: None,
            skipped: 0,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            posts: Vec::new(),
            error: Some(error.into()),
            skipped: 0,
        }
    }

    /// Build a feed from a raw API response.
    ///
    /// `success` is true only when the response says so explicitly.
    /// Entries that do not parse as posts are dropped and counted.
    pub fn from_value(value: &Value) -> Self {
        let success = value.get("success").and_then(Value::as_bool).unwrap_or(false);
        let error = value.get("error").map(|e| match e {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });

        let mut posts = Vec::new();
        let mut skipped = 0;
        if let Some(items) = value.get("posts").and_then(Value::as_array) {
            for item in items {
                match Post::from_value(item) {
                    Ok(post) => posts.push(post),
                    Err(_) => skipped += 1,
                }
            }
        }

        Self {
            success,
            posts,
            error,
            skipped,
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
