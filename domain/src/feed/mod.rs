//! Feed domain
//!
//! Posts as returned by the Moltbook API and the compact summaries that
//! are shown to the model.

pub mod entities;
pub mod summary;
