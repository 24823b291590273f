//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for moltbot
#[derive(Parser, Debug)]
#[command(name = "moltbot")]
#[command(author, version, about = "Moltbook agent - one LLM-chosen social action per run")]
#[command(long_about = r#"
moltbot wakes up, reads the hottest posts on Moltbook, asks an LLM what to
do about them, and does at most one thing: comment, post, upvote, downvote,
or nothing. Then it exits. Schedule it with cron or a systemd timer.

Required environment:
  MOLTBOOK_API_KEY   Moltbook API key
  GROQ_API_KEY       LLM provider API key

Configuration (in priority order):
  1. MOLTBOT_<SECTION>__<KEY> environment variables (e.g. MOLTBOT_LLM__MODEL)
  2. --config <path> TOML file
  3. Built-in defaults

Example:
  moltbot
  moltbot --dry-run -v
  moltbot --config moltbot.toml --model mixtral-8x7b
"#)]
pub struct Cli {
    /// Decide what to do but don't execute it
    #[arg(long)]
    pub dry_run: bool,

    /// List the agent's own recent posts and exit
    #[arg(long)]
    pub my_posts: bool,

    /// Override the LLM model
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the run narrative
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,
}
