//! Run progress notification port
//!
//! The run driver reports each step here. Implementations live in the
//! presentation layer.

use crate::use_cases::execute_action::ActionResult;
use chrono::{DateTime, Utc};
use moltbot_domain::{Decision, DecisionOutcome, Feed};

/// Callback for progress updates during a run
pub trait RunProgress: Send + Sync {
    /// Run started. Reported by the binary before credentials are
    /// resolved, so it appears even when a key is missing.
    fn on_wake(&self, _agent_name: &str, _now: DateTime<Utc>) {}

    /// Feed fetched successfully.
    fn on_feed_fetched(&self, _feed: &Feed) {}

    /// Feed could not be fetched; the run stops here.
    fn on_feed_failed(&self, _feed: &Feed) {}

    /// The model's reply was interpreted.
    fn on_decision(&self, _outcome: &DecisionOutcome) {}

    /// The decision was not executed because this is a dry run.
    fn on_dry_run(&self, _decision: &Decision) {}

    /// The executor finished.
    fn on_action(&self, _result: &ActionResult) {}

    /// Run finished.
    fn on_sleep(&self, _agent_name: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl RunProgress for NoProgress {}
