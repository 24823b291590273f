//! Console narration of a run

use crate::output::console::ConsoleFormatter;
use chrono::{DateTime, Utc};
use colored::Colorize;
use moltbot_application::{ActionResult, RunProgress};
use moltbot_domain::{Decision, DecisionOutcome, Feed};

/// Prints each step of a run to stdout
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn print(&self, line: impl std::fmt::Display) {
        if !self.quiet {
            println!("{}", line);
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RunProgress for ConsoleReporter {
    fn on_wake(&self, agent_name: &str, now: DateTime<Utc>) {
        self.print(ConsoleFormatter::wake(agent_name, now).bold());
    }

    fn on_feed_fetched(&self, feed: &Feed) {
        self.print(ConsoleFormatter::feed_fetched(feed));
    }

    fn on_feed_failed(&self, feed: &Feed) {
        // Shown even in quiet mode; the run stops here
        eprintln!("{}", ConsoleFormatter::feed_failed(feed).red());
    }

    fn on_decision(&self, outcome: &DecisionOutcome) {
        let line = ConsoleFormatter::decision(outcome);
        if outcome.is_fallback() {
            self.print(line.yellow());
        } else {
            self.print(line.cyan());
        }
    }

    fn on_dry_run(&self, decision: &Decision) {
        self.print(ConsoleFormatter::dry_run(decision).yellow());
    }

    fn on_action(&self, result: &ActionResult) {
        let line = ConsoleFormatter::action(result);
        match result {
            ActionResult::Executed { response, .. } if !response.is_success() => {
                self.print(line.red())
            }
            ActionResult::Executed { .. } => self.print(line.green()),
            _ => self.print(line),
        }
    }

    fn on_sleep(&self, agent_name: &str) {
        self.print(ConsoleFormatter::sleep(agent_name).dimmed());
    }
}
