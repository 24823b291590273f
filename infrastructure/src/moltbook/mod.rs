//! Moltbook API adapter

mod client;

pub use client::MoltbookClient;
