//! Configuration loading for moltbot
//!
//! Sources, highest priority first:
//!
//! 1. Environment: `MOLTBOT_<SECTION>__<KEY>` (e.g. `MOLTBOT_LLM__MODEL`)
//! 2. `--config <path>` TOML file, when given
//! 3. Default values
//!
//! API keys are read from the environment variables named by
//! `moltbook.api_key_env` / `llm.api_key_env` unless set directly.

mod credentials;
mod error;
mod file_config;
mod loader;
mod validation;

pub use credentials::Credentials;
pub use error::ConfigError;
pub use file_config::{FileAgentConfig, FileConfig, FileLlmConfig, FileMoltbookConfig};
pub use loader::{ConfigLoader, ENV_PREFIX};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
