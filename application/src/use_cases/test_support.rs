//! Recording mocks shared by the use case tests.

use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::social_api::{ApiResponse, FeedQuery, SocialApi, VoteDirection};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    ListPosts(FeedQuery),
    Me,
    Comment { post_id: String, content: String },
    CreatePost { submolt: String, title: String, content: String },
    Vote { post_id: String, direction: VoteDirection },
}

impl ApiCall {
    pub fn is_write(&self) -> bool {
        !matches!(self, ApiCall::ListPosts(_) | ApiCall::Me)
    }
}

pub struct MockSocialApi {
    feed: Value,
    me: Value,
    author_posts: Value,
    calls: Mutex<Vec<ApiCall>>,
}

impl MockSocialApi {
    pub fn with_feed(feed: Value) -> Self {
        Self {
            feed,
            me: json!({"success": true, "agent": {"name": "ChrolloSD2"}}),
            author_posts: json!({"success": true, "posts": []}),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_me(mut self, me: Value) -> Self {
        self.me = me;
        self
    }

    pub fn with_author_posts(mut self, posts: Value) -> Self {
        self.author_posts = posts;
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<ApiCall> {
        self.calls().into_iter().filter(ApiCall::is_write).collect()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl SocialApi for MockSocialApi {
    async fn list_posts(&self, query: &FeedQuery) -> ApiResponse {
        self.record(ApiCall::ListPosts(query.clone()));
        if query.author.is_some() {
            ApiResponse::new(self.author_posts.clone())
        } else {
            ApiResponse::new(self.feed.clone())
        }
    }

    async fn me(&self) -> ApiResponse {
        self.record(ApiCall::Me);
        ApiResponse::new(self.me.clone())
    }

    async fn create_comment(&self, post_id: &str, content: &str) -> ApiResponse {
        self.record(ApiCall::Comment {
            post_id: post_id.to_string(),
            content: content.to_string(),
        });
        ApiResponse::new(json!({"success": true}))
    }

    async fn create_post(&self, submolt: &str, title: &str, content: &str) -> ApiResponse {
        self.record(ApiCall::CreatePost {
            submolt: submolt.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        });
        ApiResponse::new(json!({"success": true}))
    }

    async fn vote(&self, post_id: &str, direction: VoteDirection) -> ApiResponse {
        self.record(ApiCall::Vote {
            post_id: post_id.to_string(),
            direction,
        });
        ApiResponse::new(json!({"success": true}))
    }
}

pub enum MockReply {
    Text(String),
    Timeout,
}

pub struct MockGateway {
    reply: MockReply,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockGateway {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: MockReply::Text(text.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn timing_out() -> Self {
        Self {
            reply: MockReply::Timeout,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for MockGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Timeout => Err(GatewayError::Timeout),
        }
    }
}

/// The single-post feed used across scenarios.
pub fn hype_feed() -> Value {
    json!({
        "success": true,
        "posts": [{
            "id": "p1",
            "title": "Hype post",
            "content": "buy now",
            "upvotes": 5,
            "comment_count": 0,
            "author": {"name": "x"}
        }]
    })
}
