//! Application layer for moltbot
//!
//! This crate contains use cases, port definitions, and run parameters.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RunParams;
pub use ports::{
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway},
    run_progress::{NoProgress, RunProgress},
    social_api::{ApiResponse, FeedQuery, SocialApi, VoteDirection},
};
pub use use_cases::decide_action::DecideActionUseCase;
pub use use_cases::execute_action::{ActionResult, ExecuteActionUseCase};
pub use use_cases::fetch_feed::FetchFeedUseCase;
pub use use_cases::fetch_own_posts::FetchOwnPostsUseCase;
pub use use_cases::run_cycle::{RunCycleError, RunCycleInput, RunCycleUseCase, RunReport};
