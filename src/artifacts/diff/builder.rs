use crate::artifacts::diff::edit::Run;
use crate::artifacts::diff::model::{DiffChunk, DiffLine, DiffResult, DiffStats};

/// Expands runs into addressed lines.
///
/// `left` and `right` are the next line numbers to hand out on each side;
/// both start at 1 and only move when a line of that side is emitted.
#[derive(Debug)]
pub struct ModelBuilder {
    left: usize,
    right: usize,
    chunks: Vec<DiffChunk>,
    stats: DiffStats,
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self {
            left: 1,
            right: 1,
            chunks: Vec::new(),
            stats: DiffStats::default(),
        }
    }

    fn next_left(&mut self) -> usize {
        let left = self.left;
        self.left += 1;
        left
    }

    fn next_right(&mut self) -> usize {
        let right = self.right;
        self.right += 1;
        right
    }

    pub fn push_run<S: AsRef<str>>(&mut self, run: Run<S>) {
        let is_unchanged = run.is_equal();

        let lines = match run {
            Run::Delete { values } => values
                .into_iter()
                .map(|value| DiffLine::Removed {
                    content: value.as_ref().to_string(),
                    left: self.next_left(),
                })
                .collect::<Vec<_>>(),
            Run::Insert { values } => values
                .into_iter()
                .map(|value| DiffLine::Added {
                    content: value.as_ref().to_string(),
                    right: self.next_right(),
                })
                .collect(),
            Run::Equal { old, new } => old
                .into_iter()
                .zip(new)
                .map(|(old, new)| {
                    let (old, new) = (old.as_ref(), new.as_ref());
                    DiffLine::Unchanged {
                        content: old.to_string(),
                        left: self.next_left(),
                        right: self.next_right(),
                        modified_content: (old != new).then(|| new.to_string()),
                    }
                })
                .collect(),
        };

        if lines.is_empty() {
            return;
        }

        for line in &lines {
            self.stats.record(line.kind());
        }

        self.chunks.push(DiffChunk {
            lines,
            is_unchanged,
        });
    }

    pub fn finish(self) -> DiffResult {
        let stats = self.stats;

        DiffResult {
            chunks: self.chunks,
            stats,
            original_line_count: stats.removed + stats.unchanged,
            modified_line_count: stats.added + stats.unchanged,
        }
    }
}

/// Builds the addressed model for an ordered run list.
pub fn build<S: AsRef<str>>(runs: impl IntoIterator<Item = Run<S>>) -> DiffResult {
    let mut builder = ModelBuilder::new();
    for run in runs {
        builder.push_run(run);
    }
    builder.finish()
}
