//! Resolved API keys

use std::fmt;

/// Bearer tokens for both APIs. Both are always present once built.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub moltbook_api_key: String,
    pub llm_api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("moltbook_api_key", &"<redacted>")
            .field("llm_api_key", &"<redacted>")
            .finish()
    }
}
