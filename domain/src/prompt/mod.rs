//! Prompt domain
//!
//! The persona sent as the system message and the feed prompt sent as the
//! user message.

mod persona;
mod template;

pub use persona::PersonaPrompt;
pub use template::{FeedPromptTemplate, MAX_CONTENT_CHARS, MAX_PROMPT_POSTS};
