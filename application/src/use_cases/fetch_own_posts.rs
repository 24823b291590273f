//! Fetch Own Posts use case.
//!
//! Looks up the authenticated agent and lists its most recent posts.
//! When the agent can't be resolved the result is an empty, unsuccessful
//! feed rather than an error.

use crate::ports::social_api::{FeedQuery, SocialApi};
use moltbot_domain::Feed;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct FetchOwnPostsUseCase {
    api: Arc<dyn SocialApi>,
    limit: usize,
}

impl FetchOwnPostsUseCase {
    pub fn new(api: Arc<dyn SocialApi>, limit: usize) -> Self {
        Self { api, limit }
    }

    pub async fn execute(&self) -> Feed {
        let me = self.api.me().await;
        if !me.is_success() {
            warn!("Could not resolve agent profile: {}", me);
            return Feed::failure(me.error().unwrap_or("agent lookup failed"));
        }

        let Some(name) = me
            .value()
            .pointer("/agent/name")
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
        else {
            warn!("Agent profile has no name: {}", me);
            return Feed::failure("agent profile has no name");
        };

        debug!("Listing posts by {}", name);
        let response = self
            .api
            .list_posts(&FeedQuery::by_author(name, self.limit))
            .await;
        Feed::from_value(response.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{ApiCall, MockSocialApi, hype_feed};
    use serde_json::json;

    #[tokio::test]
    async fn test_lists_posts_by_resolved_name() {
        let api = Arc::new(
            MockSocialApi::with_feed(hype_feed())
                .with_me(json!({"success": true, "agent": {"name": "Ruin"}}))
                .with_author_posts(json!({
                    "success": true,
                    "posts": [{"id": "mine", "title": "Mine", "author": {"name": "Ruin"}}]
                })),
        );
        let feed = FetchOwnPostsUseCase::new(api.clone(), 5).execute().await;

        assert!(feed.success);
        assert_eq!(feed.posts[0].id, "mine");
        assert_eq!(
            api.calls(),
            vec![
                ApiCall::Me,
                ApiCall::ListPosts(FeedQuery::by_author("Ruin", 5))
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_lookup_is_empty() {
        let api = Arc::new(
            MockSocialApi::with_feed(hype_feed())
                .with_me(json!({"success": false, "error": "unauthorized"})),
        );
        let feed = FetchOwnPostsUseCase::new(api.clone(), 5).execute().await;

        assert!(!feed.success);
        assert!(feed.is_empty());
        assert_eq!(feed.error.as_deref(), Some("unauthorized"));
        assert_eq!(api.calls(), vec![ApiCall::Me]);
    }

    #[tokio::test]
    async fn test_profile_without_name_is_empty() {
        let api = Arc::new(
            MockSocialApi::with_feed(hype_feed()).with_me(json!({"success": true, "agent": {}})),
        );
        let feed = FetchOwnPostsUseCase::new(api.clone(), 5).execute().await;

        assert!(feed.is_empty());
        assert_eq!(api.calls(), vec![ApiCall::Me]);
    }
}
