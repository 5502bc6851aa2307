//! Shared plumbing
//!
//! - `error`: the library error type
//! - `format`: byte size formatting for messages and summaries
//! - `logging`: one-time tracing subscriber setup

pub mod error;
pub mod format;
pub mod logging;
