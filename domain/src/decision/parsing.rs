//! Decision parsing from LLM replies.
//!
//! The model is asked for JSON only but often wraps it in prose. The reply
//! is cut from the first `{` to the last `}` and that span is parsed. When
//! the prose itself contains braces the span over-captures and the parse
//! fails; the caller then falls back to doing nothing.

use super::entities::Decision;
use super::outcome::{DecisionOutcome, FallbackReason};
use serde_json::Value;

/// Widest `{ ... }` span in `text`, inclusive.
///
/// Returns `None` if either brace is missing or the last `}` comes
/// before the first `{`.
pub fn extract_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Extract and parse the decision object from raw reply text.
pub fn extract_decision_value(text: &str) -> Option<Value> {
    let span = extract_json_span(text)?;
    serde_json::from_str(span).ok()
}

/// Turn a raw reply into a [`DecisionOutcome`].
pub fn parse_decision(text: &str) -> DecisionOutcome {
    if text.trim().is_empty() {
        return DecisionOutcome::fallback(FallbackReason::EmptyCompletion);
    }

    let Some(span) = extract_json_span(text) else {
        return DecisionOutcome::fallback(FallbackReason::NoJsonObject);
    };

    match serde_json::from_str::<Value>(span) {
        Ok(value) => DecisionOutcome::Decided(Decision::from_value(&value)),
        Err(e) => DecisionOutcome::fallback(FallbackReason::InvalidJson(e.to_string())),
    }
}
