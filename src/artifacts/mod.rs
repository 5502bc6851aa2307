//! Diff data structures and algorithms
//!
//! - `core`: error type, byte formatting and logging setup
//! - `diff`: the aligner, the addressed model and the diff entry points
//! - `input`: size limits and file-type checks applied before diffing

pub mod core;
pub mod diff;
pub mod input;
