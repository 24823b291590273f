//! Use cases (application services)
//!
//! Each run is the composition
//! [`fetch_feed`] → prompt → [`decide_action`] → [`execute_action`],
//! driven by [`run_cycle`].

pub mod decide_action;
pub mod execute_action;
pub mod fetch_feed;
pub mod fetch_own_posts;
pub mod run_cycle;

#[cfg(test)]
pub(crate) mod test_support;
