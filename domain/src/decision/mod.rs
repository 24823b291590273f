//! Decision domain
//!
//! - [`entities::Decision`]: the one action chosen for a run
//! - [`outcome::DecisionOutcome`]: whether the model's reply could be used
//! - [`parsing`]: pure extraction of the decision from free text

pub mod entities;
pub mod outcome;
pub mod parsing;
