//! Domain layer for moltbot
//!
//! This crate contains the core entities, value objects, and pure logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Feed
//!
//! A snapshot of the hottest posts on Moltbook, fetched once per run.
//!
//! ## Decision
//!
//! The single social action the LLM picked for this run: comment, post,
//! upvote, downvote, or nothing. A reply that can't be parsed becomes a
//! [`DecisionOutcome::Fallback`], which always means "do nothing".

pub mod core;
pub mod decision;
pub mod feed;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model};
pub use decision::{
    entities::{Action, Decision},
    outcome::{DecisionOutcome, FallbackReason},
    parsing::{extract_decision_value, extract_json_span, parse_decision},
};
pub use feed::{
    entities::{Author, Feed, Post},
    summary::PostSummary,
};
pub use prompt::{FeedPromptTemplate, PersonaPrompt};
