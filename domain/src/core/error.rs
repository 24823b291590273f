//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Malformed post: {0}")]
    MalformedPost(String),
}
