//! Text diffing
//!
//! The pipeline is tokenize, align, build:
//!
//! - `tokenizer`: splits text into line tokens
//! - `diff_algorithm`: Myers' shortest edit script over any token type, in linear space
//! - `interner`: dense line ids, with lines unique to one side kept out of the search
//! - `edit`: per-token edits and the runs they group into
//! - `builder`: expands runs into addressed lines with statistics
//! - `model`: the serializable result types
//! - `engine`: the entry points, `compute_diff` and `compute_inline_char_diff`
//!
//! The same aligner serves both granularities: lines for the main result and
//! characters of one line pair for intra-line highlighting.

pub mod builder;
pub mod diff_algorithm;
pub mod edit;
pub mod engine;
pub mod interner;
pub mod model;
pub mod tokenizer;
