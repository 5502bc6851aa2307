//! Stateful collaborators around the engine
//!
//! - `workspace`: reads and validates the files being compared
//! - `session`: comparison settings, the explicit comparison state and the output writer

pub mod session;
pub mod workspace;
