//! Fetch Feed use case.
//!
//! Requests the hottest posts once. No retry: a failed call comes back
//! as an unsuccessful [`Feed`] and the caller decides what to do.

use crate::ports::social_api::{FeedQuery, SocialApi};
use moltbot_domain::Feed;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct FetchFeedUseCase {
    api: Arc<dyn SocialApi>,
    limit: usize,
}

impl FetchFeedUseCase {
    pub fn new(api: Arc<dyn SocialApi>, limit: usize) -> Self {
        Self { api, limit }
    }

    pub async fn execute(&self) -> Feed {
        let response = self.api.list_posts(&FeedQuery::hot(self.limit)).await;
        let feed = Feed::from_value(response.value());

        if feed.skipped > 0 {
            warn!("Dropped {} malformed post(s) from feed", feed.skipped);
        }
        debug!(
            "Feed fetched: success={}, {} post(s)",
            feed.success,
            feed.len()
        );

        feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{ApiCall, MockSocialApi, hype_feed};
    use serde_json::json;

    #[tokio::test]
    async fn test_requests_hot_posts_with_limit() {
        let api = Arc::new(MockSocialApi::with_feed(hype_feed()));
        let feed = FetchFeedUseCase::new(api.clone(), 10).execute().await;

        assert!(feed.success);
        assert_eq!(feed.len(), 1);
        assert_eq!(api.calls(), vec![ApiCall::ListPosts(FeedQuery::hot(10))]);
    }

    #[tokio::test]
    async fn test_transport_failure_is_unsuccessful_feed() {
        let api = Arc::new(MockSocialApi::with_feed(
            json!({"success": false, "error": "operation timed out"}),
        ));
        let feed = FetchFeedUseCase::new(api.clone(), 10).execute().await;

        assert!(!feed.success);
        assert_eq!(feed.error.as_deref(), Some("operation timed out"));
        assert_eq!(api.calls().len(), 1);
    }
}
