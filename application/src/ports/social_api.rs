//! Social API port
//!
//! Defines the calls the agent makes against Moltbook. Every call returns
//! an [`ApiResponse`]; transport failures are folded into a
//! `{"success": false, "error": ...}` response by the adapter, so callers
//! branch on [`ApiResponse::is_success`] instead of handling errors.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::fmt;

/// Raw JSON body returned by the social API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse(Value);

impl ApiResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Synthetic response for a request that never got a JSON answer.
    pub fn failure(error: impl Into<String>) -> Self {
        Self(json!({ "success": false, "error": error.into() }))
    }

    /// True only when the body carries `"success": true`.
    pub fn is_success(&self) -> bool {
        self.0.get("success").and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn error(&self) -> Option<&str> {
        self.0.get("error").and_then(Value::as_str)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Query for the "list posts" endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    pub sort: Option<String>,
    pub author: Option<String>,
    pub limit: usize,
}

impl FeedQuery {
    /// Hottest posts first.
    pub fn hot(limit: usize) -> Self {
        Self {
            sort: Some("hot".to_string()),
            author: None,
            limit,
        }
    }

    /// Posts written by `author`.
    pub fn by_author(author: impl Into<String>, limit: usize) -> Self {
        Self {
            sort: None,
            author: Some(author.into()),
            limit,
        }
    }

    /// Query-string pairs in a stable order.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(3);
        if let Some(sort) = &self.sort {
            params.push(("sort", sort.clone()));
        }
        if let Some(author) = &self.author {
            params.push(("author", author.clone()));
        }
        params.push(("limit", self.limit.to_string()));
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Last path segment of the vote endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteDirection::Up => "upvote",
            VoteDirection::Down => "downvote",
        }
    }
}

/// Moltbook API.
///
/// Implementations apply authentication and the request timeout; none of
/// these methods retry.
#[async_trait]
pub trait SocialApi: Send + Sync {
    /// `GET /posts`
    async fn list_posts(&self, query: &FeedQuery) -> ApiResponse;

    /// `GET /agents/me`
    async fn me(&self) -> ApiResponse;

    /// `POST /posts/{post_id}/comments`
    async fn create_comment(&self, post_id: &str, content: &str) -> ApiResponse;

    /// `POST /posts`
    async fn create_post(&self, submolt: &str, title: &str, content: &str) -> ApiResponse;

    /// `POST /posts/{post_id}/upvote` or `/downvote`
    async fn vote(&self, post_id: &str, direction: VoteDirection) -> ApiResponse;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_shape() {
        let response = ApiResponse::failure("connection refused");
        assert!(!response.is_success());
        assert_eq!(response.error(), Some("connection refused"));
        assert_eq!(
            response.value(),
            &json!({"success": false, "error": "connection refused"})
        );
    }

    #[test]
    fn test_success_requires_explicit_flag() {
        assert!(ApiResponse::new(json!({"success": true})).is_success());
        assert!(!ApiResponse::new(json!({"posts": []})).is_success());
        assert!(!ApiResponse::new(json!({"success": "yes"})).is_success());
    }

    #[test]
    fn test_hot_query_params() {
        assert_eq!(
            FeedQuery::hot(10).to_params(),
            vec![("sort", "hot".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn test_author_query_params() {
        assert_eq!(
            FeedQuery::by_author("ChrolloSD2", 5).to_params(),
            vec![
                ("author", "ChrolloSD2".to_string()),
                ("limit", "5".to_string())
            ]
        );
    }
}
