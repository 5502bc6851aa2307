//! Command implementations
//!
//! Each command is an `impl Session` block writing to the session's writer:
//!
//! - `diff`: unified line listing with intra-line highlighting
//! - `json`: the full diff result as JSON
//! - `stat`: line counts and change statistics only
//! - `chars`: character diff of two single lines

pub mod chars;
pub mod diff;
pub mod json;
pub mod stat;
