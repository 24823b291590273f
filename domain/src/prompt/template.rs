//! Feed prompt (user message)

use crate::feed::entities::Feed;
use crate::feed::summary::PostSummary;
use chrono::{DateTime, Utc};

/// Most posts shown to the model
pub const MAX_PROMPT_POSTS: usize = 10;

/// Longest post body shown to the model, in characters
pub const MAX_CONTENT_CHARS: usize = 500;

/// Builds the user prompt from a feed snapshot.
///
/// Output depends only on the feed and the timestamp passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedPromptTemplate {
    max_posts: usize,
    max_content_chars: usize,
}

impl Default for FeedPromptTemplate {
    fn default() -> Self {
        Self {
            max_posts: MAX_PROMPT_POSTS,
            max_content_chars: MAX_CONTENT_CHARS,
        }
    }
}

impl FeedPromptTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_posts(mut self, max_posts: usize) -> Self {
        self.max_posts = max_posts;
        self
    }

    pub fn with_max_content_chars(mut self, max_content_chars: usize) -> Self {
        self.max_content_chars = max_content_chars;
        self
    }

    /// Summaries of the first `max_posts` posts, in feed order.
    pub fn summarize(&self, feed: &Feed) -> Vec<PostSummary> {
        feed.posts
            .iter()
            .take(self.max_posts)
            .map(|post| PostSummary::from_post(post, self.max_content_chars))
            .collect()
    }

    /// Render the full prompt.
    pub fn build(&self, feed: &Feed, now: DateTime<Utc>) -> String {
        let summaries = self.summarize(feed);
        // Serializing plain strings and integers cannot fail
        let posts_json = serde_json::to_string_pretty(&summaries).unwrap_or_else(|_| "[]".into());

        format!(
            r#"Current time: {}

Here are the latest posts on Moltbook:

{}

Based on your personality, decide what to do. You can:
1. Comment on a post (provide post id and your comment)
2. Create a new post (provide title and content)
3. Upvote a post you genuinely like
4. Downvote a post you find hollow/manipulative
5. Do nothing if nothing catches your interest

Remember: Quality over quantity. Only act if you have something real to say.

Respond with JSON only."#,
            now.format("%Y-%m-%dT%H:%M:%S%.6f"),
            posts_json
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::entities::Post;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 30, 12, 0, 0).unwrap()
    }

    fn feed_of(n: usize) -> Feed {
        Feed::from_posts(
            (0..n)
                .map(|i| {
                    Post::new(format!("p{}", i), format!("Post {}", i))
                        .with_content("é".repeat(700))
                        .with_author("author")
                })
                .collect(),
        )
    }

    #[test]
    fn test_fifteen_posts_keeps_first_ten() {
        let template = FeedPromptTemplate::new();
        let summaries = template.summarize(&feed_of(15));

        assert_eq!(summaries.len(), 10);
        assert_eq!(summaries[0].id, "p0");
        assert_eq!(summaries[9].id, "p9");
        assert!(summaries.iter().all(|s| s.content.chars().count() <= 500));
    }

    #[test]
    fn test_prompt_excludes_posts_past_limit() {
        let prompt = FeedPromptTemplate::new().build(&feed_of(15), fixed_now());
        assert!(prompt.contains("\"id\": \"p9\""));
        assert!(!prompt.contains("\"id\": \"p10\""));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let template = FeedPromptTemplate::new();
        let feed = feed_of(3);
        assert_eq!(template.build(&feed, fixed_now()), template.build(&feed, fixed_now()));
    }

    #[test]
    fn test_prompt_layout() {
        let feed = Feed::from_posts(vec![
            Post::new("p1", "Hype post")
                .with_content("buy now")
                .with_author("x")
                .with_counts(5, 0),
        ]);
        let prompt = FeedPromptTemplate::new().build(&feed, fixed_now());

        assert!(prompt.starts_with("Current time: 2026-01-30T12:00:00.000000\n"));
        assert!(prompt.contains(
            r#"[
  {
    "id": "p1",
    "title": "Hype post",
    "content": "buy now",
    "author": "x",
    "upvotes": 5,
    "comments": 0
  }
]"#
        ));
        assert!(prompt.ends_with("Respond with JSON only."));
    }

    #[test]
    fn test_custom_limits() {
        let template = FeedPromptTemplate::new()
            .with_max_posts(2)
            .with_max_content_chars(5);
        let summaries = template.summarize(&feed_of(4));
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].content, "ééééé");
    }

    #[test]
    fn test_empty_feed_renders_empty_array() {
        let prompt = FeedPromptTemplate::new().build(&Feed::from_posts(vec![]), fixed_now());
        assert!(prompt.contains("Moltbook:\n\n[]\n\n"));
    }
}
