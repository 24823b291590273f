//! Decision outcome: a usable decision, or the reason there isn't one

use super::entities::Decision;
use thiserror::Error;

/// Why the model's reply could not be turned into a decision
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    #[error("reply contains no JSON object")]
    NoJsonObject,

    #[error("invalid JSON in reply: {0}")]
    InvalidJson(String),

    #[error("completion had no text")]
    EmptyCompletion,

    #[error("LLM request failed: {0}")]
    Gateway(String),
}

/// Result of asking the model for a decision.
///
/// Keeps "the model chose to do nothing" apart from "the reply was
/// unusable"; both execute as `none`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionOutcome {
    Decided(Decision),
    Fallback { reason: FallbackReason },
}

impl DecisionOutcome {
    pub fn fallback(reason: FallbackReason) -> Self {
        DecisionOutcome::Fallback { reason }
    }

    /// The decision to execute. Always `none` for a fallback.
    pub fn decision(&self) -> Decision {
        match self {
            DecisionOutcome::Decided(decision) => decision.clone(),
            DecisionOutcome::Fallback { .. } => Decision::none(),
        }
    }

    pub fn into_decision(self) -> Decision {
        match self {
            DecisionOutcome::Decided(decision) => decision,
            DecisionOutcome::Fallback { .. } => Decision::none(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, DecisionOutcome::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            DecisionOutcome::Fallback { reason } => Some(reason),
            DecisionOutcome::Decided(_) => None,
        }
    }
}
