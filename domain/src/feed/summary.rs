//! Compact projection of a post for the decision prompt

use super::entities::Post;
use crate::util::truncate_chars;
use serde::Serialize;

/// What the model sees of each post.
///
/// Field order is the order they appear in the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub upvotes: u64,
    pub comments: u64,
}

impl PostSummary {
    /// Summarize a post, keeping at most `max_content_chars` of its body.
    pub fn from_post(post: &Post, max_content_chars: usize) -> Self {
        let content = post
            .content
            .as_deref()
            .map(|c| truncate_chars(c, max_content_chars).to_string())
            .unwrap_or_default();

        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            content,
            author: post.author.name.clone(),
            upvotes: post.upvotes,
            comments: post.comment_count,
        }
    }
}
