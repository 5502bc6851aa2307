//! knowdiff: line and character level text diffing.
//!
//! The engine is a pure function of its inputs. [`compute_diff`] aligns two
//! texts line by line with Myers' algorithm and returns a [`DiffResult`] whose
//! lines carry their left/right positions and whose statistics are derived
//! from the emitted lines. [`compute_inline_char_diff`] runs the same aligner
//! over the characters of one line pair.
//!
//! ```
//! use knowdiff::{DiffOptions, compute_diff};
//!
//! let result = compute_diff("hello\nworld\n", "hello\nearth\n", DiffOptions::default());
//! assert_eq!((result.stats.added, result.stats.removed), (1, 1));
//! ```

use is_terminal::IsTerminal;

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::core::error::{DiffError, Side};
pub use artifacts::diff::engine::{
    DiffOptions, compute_diff, compute_diff_bytes, compute_diff_offloaded,
    compute_inline_char_diff,
};
pub use artifacts::diff::model::{
    CharSegment, DiffChunk, DiffLine, DiffResult, DiffStats, LineKind, LineNumber,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn apply(self) {
        let enabled = match self {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        };
        colored::control::set_override(enabled);
    }
}
