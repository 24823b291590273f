//! Infrastructure layer for moltbot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration loading.

pub mod adapters;
pub mod config;
pub mod http;
pub mod llm;
pub mod moltbook;

// Re-export commonly used types
pub use adapters::Adapters;
pub use config::{
    ConfigError, ConfigIssue, ConfigIssueCode, ConfigLoader, Credentials, FileAgentConfig,
    FileConfig, FileLlmConfig, FileMoltbookConfig, Severity,
};
pub use http::{HttpTransport, JsonResponse, TransportError};
pub use llm::ChatCompletionsGateway;
pub use moltbook::MoltbookClient;
