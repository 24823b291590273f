//! Console text for each step of a run

use chrono::{DateTime, Utc};
use moltbot_application::ActionResult;
use moltbot_domain::{Action, Decision, DecisionOutcome, Feed};

/// Formats run events as plain console lines
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn wake(agent_name: &str, now: DateTime<Utc>) -> String {
        format!(
            "[{}] {} waking up...",
            now.format("%Y-%m-%dT%H:%M:%S%.6f"),
            agent_name
        )
    }

    pub fn sleep(agent_name: &str) -> String {
        format!("{} going back to sleep...", agent_name)
    }

    pub fn feed_fetched(feed: &Feed) -> String {
        format!("Fetched {} posts", feed.len())
    }

    pub fn feed_failed(feed: &Feed) -> String {
        format!(
            "Error fetching feed: {}",
            feed.error.as_deref().unwrap_or("response did not report success")
        )
    }

    pub fn decision(outcome: &DecisionOutcome) -> String {
        match outcome {
            DecisionOutcome::Decided(decision) => format!("Decision: {}", decision),
            DecisionOutcome::Fallback { reason } => {
                format!("Decision: {} ({})", Decision::none(), reason)
            }
        }
    }

    pub fn dry_run(decision: &Decision) -> String {
        format!("Dry run: would execute {}", decision)
    }

    pub fn action(result: &ActionResult) -> String {
        match result {
            ActionResult::Idle => "Decision: Do nothing this round".to_string(),
            ActionResult::Skipped { action, missing } => {
                format!("Skipped {}: no {}", action, missing)
            }
            ActionResult::Executed {
                action,
                target,
                response,
            } => {
                let target = target.as_deref().unwrap_or("");
                match action {
                    Action::Comment => format!("Commented on {}: {}", target, response),
                    Action::Post => format!("Created post: {}", response),
                    Action::Upvote => format!("Upvoted {}: {}", target, response),
                    Action::Downvote => format!("Downvoted {}: {}", target, response),
                    Action::None => "Decision: Do nothing this round".to_string(),
                }
            }
        }
    }

    /// Listing for `--my-posts`.
    pub fn own_posts(feed: &Feed) -> String {
        if !feed.success {
            return format!(
                "Could not list own posts: {}",
                feed.error.as_deref().unwrap_or("unknown error")
            );
        }
        if feed.is_empty() {
            return "No posts yet".to_string();
        }

        let mut output = String::new();
        for post in &feed.posts {
            output.push_str(&format!(
                "{}  {}  (+{}, {} comments)\n",
                post.id, post.title, post.upvotes, post.comment_count
            ));
        }
        output
    }
}
