//! [`SocialApi`] implementation for the Moltbook REST API.
//!
//! Transport failures never leave this module as errors: they are logged
//! and returned as `{"success": false, "error": ...}` so callers only ever
//! check `success`. Post ids come from the model's reply and are sent as
//! a single encoded path segment.

use crate::http::{HttpTransport, JsonResponse, TransportError};
use async_trait::async_trait;
use moltbot_application::ports::social_api::{ApiResponse, FeedQuery, SocialApi, VoteDirection};
use serde_json::json;
use std::time::Duration;
use tracing::warn;

pub struct MoltbookClient {
    transport: HttpTransport,
}

impl MoltbookClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.moltbook.com/api/v1";

    pub fn new(
        base_url: impl AsRef<str>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        Ok(Self {
            transport: HttpTransport::new(base_url, api_key, timeout)?,
        })
    }

    async fn get(&self, segments: &[&str], query: &[(&'static str, String)]) -> ApiResponse {
        into_api_response(segments, self.transport.get(segments, query).await)
    }

    async fn post(&self, segments: &[&str], body: serde_json::Value) -> ApiResponse {
        into_api_response(segments, self.transport.post(segments, &body).await)
    }
}

fn into_api_response(
    segments: &[&str],
    result: Result<JsonResponse, TransportError>,
) -> ApiResponse {
    match result {
        Ok(response) => ApiResponse::new(response.body),
        Err(e) => {
            warn!("API error on /{}: {}", segments.join("/"), e);
            ApiResponse::failure(e.to_string())
        }
    }
}

#[async_trait]
impl SocialApi for MoltbookClient {
    async fn list_posts(&self, query: &FeedQuery) -> ApiResponse {
        self.get(&["posts"], &query.to_params()).await
    }

    async fn me(&self) -> ApiResponse {
        self.get(&["agents", "me"], &[]).await
    }

    async fn create_comment(&self, post_id: &str, content: &str) -> ApiResponse {
        self.post(&["posts", post_id, "comments"], json!({ "content": content }))
            .await
    }

    async fn create_post(&self, submolt: &str, title: &str, content: &str) -> ApiResponse {
        self.post(
            &["posts"],
            json!({
                "submolt": submolt,
                "title": title,
                "content": content,
            }),
        )
        .await
    }

    async fn vote(&self, post_id: &str, direction: VoteDirection) -> ApiResponse {
        self.post(&["posts", post_id, direction.as_str()], json!({}))
            .await
    }
}
