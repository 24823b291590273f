//! Run Cycle use case.
//!
//! One invocation of the agent, every step awaited in order:
//!
//! 1. Fetch the hot feed (stop if it was not successful)
//! 2. Build the prompt
//! 3. Ask the model for a decision
//! 4. Execute the decision (unless this is a dry run)
//!
//! Credentials are checked before the adapters are built, so a run never
//! starts without them. The wake line is reported by the caller before
//! that check.

use crate::config::RunParams;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::run_progress::RunProgress;
use crate::ports::social_api::SocialApi;
use crate::use_cases::decide_action::DecideActionUseCase;
use crate::use_cases::execute_action::{ActionResult, ExecuteActionUseCase};
use crate::use_cases::fetch_feed::FetchFeedUseCase;
use chrono::{DateTime, Utc};
use moltbot_domain::DecisionOutcome;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that end a run early.
#[derive(Error, Debug)]
pub enum RunCycleError {
    #[error("Error fetching feed: {0}")]
    FeedUnavailable(String),
}

#[derive(Debug, Clone)]
pub struct RunCycleInput {
    pub params: RunParams,
    /// Clock reading stamped into the prompt.
    pub now: DateTime<Utc>,
}

impl RunCycleInput {
    pub fn new(params: RunParams, now: DateTime<Utc>) -> Self {
        Self { params, now }
    }
}

/// What happened during a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub posts_fetched: usize,
    pub outcome: DecisionOutcome,
    /// `None` for a dry run.
    pub action: Option<ActionResult>,
}

pub struct RunCycleUseCase {
    api: Arc<dyn SocialApi>,
    gateway: Arc<dyn LlmGateway>,
}

impl RunCycleUseCase {
    pub fn new(api: Arc<dyn SocialApi>, gateway: Arc<dyn LlmGateway>) -> Self {
        Self { api, gateway }
    }

    pub async fn execute(
        &self,
        input: RunCycleInput,
        progress: &dyn RunProgress,
    ) -> Result<RunReport, RunCycleError> {
        let params = &input.params;

        // 1. Feed
        let feed = FetchFeedUseCase::new(self.api.clone(), params.feed_limit)
            .execute()
            .await;
        if !feed.success {
            progress.on_feed_failed(&feed);
            let reason = feed
                .error
                .clone()
                .unwrap_or_else(|| "feed response did not report success".to_string());
            debug!("Ending run early: feed unavailable");
            return Err(RunCycleError::FeedUnavailable(reason));
        }
        info!("Fetched {} posts", feed.len());
        progress.on_feed_fetched(&feed);

        // 2. Prompt
        let prompt = params.prompt_template().build(&feed, input.now);

        // 3. Decision
        let request = DecideActionUseCase::request_for(params, prompt);
        let outcome = DecideActionUseCase::new(self.gateway.clone())
            .execute(&request)
            .await;
        progress.on_decision(&outcome);

        // 4. Action
        let decision = outcome.decision();
        let action = if params.dry_run {
            info!("Dry run, not executing {}", decision);
            progress.on_dry_run(&decision);
            None
        } else {
            let result = ExecuteActionUseCase::new(self.api.clone(), params.submolt.clone())
                .execute(&decision)
                .await;
            progress.on_action(&result);
            Some(result)
        };

        progress.on_sleep(&params.agent_name);

        Ok(RunReport {
            posts_fetched: feed.len(),
            outcome,
            action,
        })
    }
}
