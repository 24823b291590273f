//! Configuration errors

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing API key for {service}: set {env_var}")]
    MissingCredential {
        service: &'static str,
        env_var: String,
    },

    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
