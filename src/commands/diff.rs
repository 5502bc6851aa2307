use crate::areas::session::Session;
use crate::artifacts::diff::engine::compute_inline_char_diff;
use crate::artifacts::diff::model::{CharSegment, DiffChunk, DiffLine, DiffResult, LineKind};
use crate::artifacts::input::UNCHANGED_CONTEXT_LINES;
use colored::{ColoredString, Colorize};
use std::path::Path;

const NO_DIFFERENCES: &str = "No differences found, both inputs are identical.";

#[derive(Debug, Clone, Copy)]
pub struct DiffViewOptions {
    /// Highlight changed characters within paired removed/added lines.
    pub inline: bool,
    /// Hide unchanged lines further than `UNCHANGED_CONTEXT_LINES` from a change.
    pub collapse: bool,
}

impl Session {
    pub async fn diff(
        &self,
        original: &Path,
        modified: &Path,
        opts: &DiffViewOptions,
    ) -> anyhow::Result<()> {
        let result = self.compare_files(original, modified).await?;

        writeln!(
            self.writer(),
            "{}",
            format!("--- a/{}", original.display()).bold()
        )?;
        writeln!(
            self.writer(),
            "{}",
            format!("+++ b/{}", modified.display()).bold()
        )?;

        if result.has_changes() {
            self.print_diff_lines(&result, opts)?;
        } else {
            writeln!(self.writer(), "{NO_DIFFERENCES}")?;
        }

        writeln!(self.writer(), "{}", result.stats.to_string().cyan())?;

        Ok(())
    }

    fn print_diff_lines(&self, result: &DiffResult, opts: &DiffViewOptions) -> anyhow::Result<()> {
        let last = result.chunks.len().saturating_sub(1);
        let mut chunks = result.chunks.iter().enumerate().peekable();

        while let Some((i, chunk)) = chunks.next() {
            if opts.inline && chunk.kind() == Some(LineKind::Removed) {
                if let Some((_, added)) =
                    chunks.next_if(|(_, next)| next.kind() == Some(LineKind::Added))
                {
                    self.print_paired_chunks(chunk, added)?;
                    continue;
                }
            }

            if opts.collapse && chunk.is_unchanged {
                let head = if i == 0 { 0 } else { UNCHANGED_CONTEXT_LINES };
                let tail = if i == last { 0 } else { UNCHANGED_CONTEXT_LINES };
                self.print_collapsed_chunk(chunk, head, tail)?;
                continue;
            }

            for line in &chunk.lines {
                self.print_diff_line(line, None)?;
            }
        }

        Ok(())
    }

    /// Keeps `head` leading and `tail` trailing lines of an unchanged chunk.
    fn print_collapsed_chunk(&self, chunk: &DiffChunk, head: usize, tail: usize) -> anyhow::Result<()> {
        let len = chunk.lines.len();
        if len <= head + tail {
            for line in &chunk.lines {
                self.print_diff_line(line, None)?;
            }
            return Ok(());
        }

        for line in &chunk.lines[..head] {
            self.print_diff_line(line, None)?;
        }
        let hidden = len - head - tail;
        let noun = if hidden == 1 { "line" } else { "lines" };
        writeln!(
            self.writer(),
            "{}",
            format!("@@ {hidden} unchanged {noun} @@").cyan()
        )?;
        for line in &chunk.lines[len - tail..] {
            self.print_diff_line(line, None)?;
        }

        Ok(())
    }

    /// Pairs removed and added lines one-to-one and marks the characters that changed.
    fn print_paired_chunks(&self, removed: &DiffChunk, added: &DiffChunk) -> anyhow::Result<()> {
        let segments = removed
            .lines
            .iter()
            .zip(&added.lines)
            .map(|(old, new)| compute_inline_char_diff(old.content(), new.content()))
            .collect::<Vec<_>>();

        for (i, line) in removed.lines.iter().enumerate() {
            self.print_diff_line(line, segments.get(i).map(Vec::as_slice))?;
        }
        for (i, line) in added.lines.iter().enumerate() {
            self.print_diff_line(line, segments.get(i).map(Vec::as_slice))?;
        }

        Ok(())
    }

    fn print_diff_line(&self, line: &DiffLine, segments: Option<&[CharSegment]>) -> anyhow::Result<()> {
        let number = line.line_number();
        let gutter = format!("{} {}", gutter(number.left), gutter(number.right));

        let text = match line {
            DiffLine::Removed { content, .. } => {
                let body = match segments {
                    Some(segments) => highlight(segments, LineKind::Removed),
                    None => content.red().to_string(),
                };
                format!("{}{body}", "-".red())
            }
            DiffLine::Added { content, .. } => {
                let body = match segments {
                    Some(segments) => highlight(segments, LineKind::Added),
                    None => content.green().to_string(),
                };
                format!("{}{body}", "+".green())
            }
            DiffLine::Unchanged { content, .. } => format!(" {content}"),
        };

        writeln!(self.writer(), "{} {text}", gutter.dimmed())?;

        Ok(())
    }
}

fn gutter(number: Option<usize>) -> String {
    number
        .map(|n| format!("{n:>4}"))
        .unwrap_or_else(|| " ".repeat(4))
}

/// Renders one side of a char diff, emphasising the segments unique to that side.
fn highlight(segments: &[CharSegment], side: LineKind) -> String {
    let paint = |value: &str, changed: bool| -> ColoredString {
        let base = match side {
            LineKind::Added => value.green(),
            _ => value.red(),
        };
        if changed { base.bold().underline() } else { base }
    };

    segments
        .iter()
        .filter(|segment| match side {
            LineKind::Added => !segment.is_removed(),
            _ => !segment.is_added(),
        })
        .map(|segment| {
            let changed = !matches!(segment, CharSegment::Equal { .. });
            paint(segment.value(), changed).to_string()
        })
        .collect()
}
