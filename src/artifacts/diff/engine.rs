use crate::artifacts::core::error::{DiffError, Side};
use crate::artifacts::diff::builder::build;
use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, MyersDiff, edits};
use crate::artifacts::diff::edit::{Run, group_runs};
use crate::artifacts::diff::interner::Interner;
use crate::artifacts::diff::model::{CharSegment, DiffResult};
use crate::artifacts::diff::tokenizer::{normalize_whitespace, split_lines};
use derive_new::new;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct DiffOptions {
    /// Compare lines with leading and trailing whitespace trimmed.
    pub ignore_whitespace: bool,
}

/// Line diff of `original` against `modified`.
pub fn compute_diff(original: &str, modified: &str, options: DiffOptions) -> DiffResult {
    let _span = tracing::debug_span!(
        "compute_diff",
        ignore_whitespace = options.ignore_whitespace
    )
    .entered();

    let old_lines = split_lines(original);
    let new_lines = split_lines(modified);

    let mut interner = Interner::default();
    let old_ids = interner.intern_all(
        old_lines
            .iter()
            .copied()
            .map(|line| line_key(line, options.ignore_whitespace)),
    );
    let new_ids = interner.intern_all(
        new_lines
            .iter()
            .copied()
            .map(|line| line_key(line, options.ignore_whitespace)),
    );
    let steps = interner.align(&old_ids, &new_ids);

    let runs = group_runs(edits(&steps, &old_lines, &new_lines));

    debug!(
        old_lines = old_lines.len(),
        new_lines = new_lines.len(),
        runs = runs.len(),
        "aligned lines"
    );

    let result = build(runs);

    debug!(
        added = result.stats.added,
        removed = result.stats.removed,
        unchanged = result.stats.unchanged,
        "built diff model"
    );

    result
}

/// Lines are equal when their keys are; whitespace mode keys by the trimmed line.
fn line_key(line: &str, ignore_whitespace: bool) -> &str {
    if ignore_whitespace {
        normalize_whitespace(line)
    } else {
        line
    }
}

/// Like [`compute_diff`], but for raw bytes that must first decode as UTF-8.
pub fn compute_diff_bytes(
    original: &[u8],
    modified: &[u8],
    options: DiffOptions,
) -> Result<DiffResult, DiffError> {
    let original = decode(original, Side::Original)?;
    let modified = decode(modified, Side::Modified)?;

    Ok(compute_diff(original, modified, options))
}

pub(crate) fn decode(bytes: &[u8], side: Side) -> Result<&str, DiffError> {
    std::str::from_utf8(bytes).map_err(|source| DiffError::InvalidInput {
        side,
        reason: source.to_string(),
    })
}

/// Runs [`compute_diff`] on a blocking worker thread.
///
/// Dropping the returned future abandons the result; the worker still runs
/// to completion in the background.
pub async fn compute_diff_offloaded(
    original: String,
    modified: String,
    options: DiffOptions,
) -> Result<DiffResult, DiffError> {
    let size = original.len() + modified.len();
    debug!(size, "offloading diff to a blocking worker");

    let result =
        tokio::task::spawn_blocking(move || compute_diff(&original, &modified, options)).await?;

    Ok(result)
}

/// Character diff of a single line pair, for intra-line highlighting.
///
/// Always exact; the whitespace option does not apply at this granularity.
pub fn compute_inline_char_diff(old_line: &str, new_line: &str) -> Vec<CharSegment> {
    let old_chars = old_line.chars().collect::<Vec<_>>();
    let new_chars = new_line.chars().collect::<Vec<_>>();

    MyersDiff::new(&old_chars, &new_chars)
        .runs()
        .into_iter()
        .map(|run| match run {
            Run::Delete { values } => CharSegment::Removed {
                value: values.into_iter().collect(),
            },
            Run::Insert { values } => CharSegment::Added {
                value: values.into_iter().collect(),
            },
            Run::Equal { old, .. } => CharSegment::Equal {
                value: old.into_iter().collect(),
            },
        })
        .collect()
}
