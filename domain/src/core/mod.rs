//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - the chat model asked to make the decision
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod model;
