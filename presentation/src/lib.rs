//! Presentation layer for moltbot
//!
//! This crate contains the CLI definition, console formatting, and the
//! progress reporter that narrates a run.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ConsoleReporter;
