//! Execute Action use case.
//!
//! Dispatches a [`Decision`] to at most one write endpoint. A decision
//! that lacks a field its action needs is skipped without a call; this is
//! not treated as an error. Failed writes are reported and never retried.

use crate::ports::social_api::{ApiResponse, SocialApi, VoteDirection};
use moltbot_domain::{Action, Decision};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What the executor did with a decision.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    /// The decision was `none`; nothing was sent.
    Idle,
    /// A required field was missing; nothing was sent.
    Skipped {
        action: Action,
        missing: &'static str,
    },
    /// One write was sent; `response` is whatever came back.
    Executed {
        action: Action,
        target: Option<String>,
        response: ApiResponse,
    },
}

impl ActionResult {
    /// Whether a write request was sent.
    pub fn wrote(&self) -> bool {
        matches!(self, ActionResult::Executed { .. })
    }
}

pub struct ExecuteActionUseCase {
    api: Arc<dyn SocialApi>,
    submolt: String,
}

impl ExecuteActionUseCase {
    pub fn new(api: Arc<dyn SocialApi>, submolt: impl Into<String>) -> Self {
        Self {
            api,
            submolt: submolt.into(),
        }
    }

    pub async fn execute(&self, decision: &Decision) -> ActionResult {
        let result = match decision.action {
            Action::None => ActionResult::Idle,
            Action::Comment => self.comment(decision).await,
            Action::Post => self.post(decision).await,
            Action::Upvote => self.vote(decision, VoteDirection::Up).await,
            Action::Downvote => self.vote(decision, VoteDirection::Down).await,
        };

        match &result {
            ActionResult::Idle => info!("Decision: do nothing this round"),
            ActionResult::Skipped { action, missing } => {
                debug!("Skipping {}: no {}", action, missing)
            }
            ActionResult::Executed {
                action, response, ..
            } => {
                if response.is_success() {
                    info!("{} succeeded", action);
                } else {
                    warn!("{} failed: {}", action, response);
                }
            }
        }

        result
    }

    async fn comment(&self, decision: &Decision) -> ActionResult {
        let Some(target) = decision.target_id() else {
            return skipped(Action::Comment, "target_id");
        };
        let Some(content) = decision.content() else {
            return skipped(Action::Comment, "content");
        };

        let response = self.api.create_comment(target, content).await;
        ActionResult::Executed {
            action: Action::Comment,
            target: Some(target.to_string()),
            response,
        }
    }

    async fn post(&self, decision: &Decision) -> ActionResult {
        let Some(title) = decision.title() else {
            return skipped(Action::Post, "title");
        };
        let Some(content) = decision.content() else {
            return skipped(Action::Post, "content");
        };

        let response = self.api.create_post(&self.submolt, title, content).await;
        ActionResult::Executed {
            action: Action::Post,
            target: None,
            response,
        }
    }

    async fn vote(&self, decision: &Decision, direction: VoteDirection) -> ActionResult {
        let action = match direction {
            VoteDirection::Up => Action::Upvote,
            VoteDirection::Down => Action::Downvote,
        };
        let Some(target) = decision.target_id() else {
            return skipped(action, "target_id");
        };

        let response = self.api.vote(target, direction).await;
        ActionResult::Executed {
            action,
            target: Some(target.to_string()),
            response,
        }
    }
}

fn skipped(action: Action, missing: &'static str) -> ActionResult {
    ActionResult::Skipped { action, missing }
}
