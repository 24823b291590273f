//! Application-level configuration.
//!
//! - [`RunParams`]: everything one run needs besides its adapters

pub mod run_params;

pub use run_params::RunParams;
