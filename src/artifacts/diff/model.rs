//! Addressed diff model handed to presentation layers.
//!
//! Every type here is plain data: it serializes to the camelCase record shape
//! (`isUnchanged`, `originalLineCount`, `lineNumber: { left, right }`) and is
//! never mutated once a [`DiffResult`] has been returned.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Added,
    Removed,
    Unchanged,
}

impl Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LineKind::Added => "added",
            LineKind::Removed => "removed",
            LineKind::Unchanged => "unchanged",
        };
        write!(f, "{name}")
    }
}

/// 1-based position of a line in the original (`left`) and modified (`right`) text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineNumber {
    pub left: Option<usize>,
    pub right: Option<usize>,
}

/// One line of the diff.
///
/// The position shape is fixed by the variant: an added line only exists on
/// the right, a removed line only on the left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RawDiffLine", try_from = "RawDiffLine")]
pub enum DiffLine {
    Added {
        content: String,
        right: usize,
    },
    Removed {
        content: String,
        left: usize,
    },
    Unchanged {
        content: String,
        left: usize,
        right: usize,
        /// Right-side text when it differs from `content`, which happens only
        /// when lines were matched ignoring whitespace.
        modified_content: Option<String>,
    },
}

impl DiffLine {
    pub fn kind(&self) -> LineKind {
        match self {
            DiffLine::Added { .. } => LineKind::Added,
            DiffLine::Removed { .. } => LineKind::Removed,
            DiffLine::Unchanged { .. } => LineKind::Unchanged,
        }
    }

    /// The line as it reads in the original text, or in the modified text for added lines.
    pub fn content(&self) -> &str {
        match self {
            DiffLine::Added { content, .. }
            | DiffLine::Removed { content, .. }
            | DiffLine::Unchanged { content, .. } => content,
        }
    }

    /// The line as it reads in the original text, if it exists there.
    pub fn original_content(&self) -> Option<&str> {
        match self {
            DiffLine::Added { .. } => None,
            DiffLine::Removed { content, .. } | DiffLine::Unchanged { content, .. } => {
                Some(content)
            }
        }
    }

    /// The line as it reads in the modified text, if it exists there.
    pub fn modified_content(&self) -> Option<&str> {
        match self {
            DiffLine::Added { content, .. } => Some(content),
            DiffLine::Removed { .. } => None,
            DiffLine::Unchanged {
                content,
                modified_content,
                ..
            } => Some(modified_content.as_deref().unwrap_or(content)),
        }
    }

    pub fn line_number(&self) -> LineNumber {
        match *self {
            DiffLine::Added { right, .. } => LineNumber {
                left: None,
                right: Some(right),
            },
            DiffLine::Removed { left, .. } => LineNumber {
                left: Some(left),
                right: None,
            },
            DiffLine::Unchanged { left, right, .. } => LineNumber {
                left: Some(left),
                right: Some(right),
            },
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDiffLine {
    #[serde(rename = "type")]
    kind: LineKind,
    content: String,
    line_number: LineNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    modified_content: Option<String>,
}

impl From<DiffLine> for RawDiffLine {
    fn from(line: DiffLine) -> Self {
        let kind = line.kind();
        let line_number = line.line_number();
        let (content, modified_content) = match line {
            DiffLine::Added { content, .. } | DiffLine::Removed { content, .. } => {
                (content, None)
            }
            DiffLine::Unchanged {
                content,
                modified_content,
                ..
            } => (content, modified_content),
        };

        RawDiffLine {
            kind,
            content,
            line_number,
            modified_content,
        }
    }
}

impl TryFrom<RawDiffLine> for DiffLine {
    type Error = String;

    fn try_from(raw: RawDiffLine) -> Result<Self, Self::Error> {
        let LineNumber { left, right } = raw.line_number;
        match (raw.kind, left, right) {
            (LineKind::Added, None, Some(right)) => Ok(DiffLine::Added {
                content: raw.content,
                right,
            }),
            (LineKind::Removed, Some(left), None) => Ok(DiffLine::Removed {
                content: raw.content,
                left,
            }),
            (LineKind::Unchanged, Some(left), Some(right)) => Ok(DiffLine::Unchanged {
                content: raw.content,
                left,
                right,
                modified_content: raw.modified_content,
            }),
            (kind, left, right) => Err(format!(
                "{kind} line cannot have line numbers left={left:?}, right={right:?}"
            )),
        }
    }
}

/// Lines expanded from one run of the edit script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffChunk {
    pub lines: Vec<DiffLine>,
    pub is_unchanged: bool,
}

impl DiffChunk {
    pub fn kind(&self) -> Option<LineKind> {
        self.lines.first().map(DiffLine::kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
    pub total: usize,
}

impl DiffStats {
    pub(crate) fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Added => self.added += 1,
            LineKind::Removed => self.removed += 1,
            LineKind::Unchanged => self.unchanged += 1,
        }
        self.total += 1;
    }
}

impl Display for DiffStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} lines: +{} -{} ={}",
            self.total, self.added, self.removed, self.unchanged
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub chunks: Vec<DiffChunk>,
    pub stats: DiffStats,
    pub original_line_count: usize,
    pub modified_line_count: usize,
}

impl DiffResult {
    pub fn lines(&self) -> impl Iterator<Item = &DiffLine> {
        self.chunks.iter().flat_map(|chunk| chunk.lines.iter())
    }

    pub fn has_changes(&self) -> bool {
        self.stats.added > 0 || self.stats.removed > 0
    }

    /// The original text's lines, in order.
    pub fn original_lines(&self) -> impl Iterator<Item = &str> {
        self.lines().filter_map(DiffLine::original_content)
    }

    /// The modified text's lines, in order.
    pub fn modified_lines(&self) -> impl Iterator<Item = &str> {
        self.lines().filter_map(DiffLine::modified_content)
    }
}

/// A span of characters from an inline (intra-line) diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CharSegment {
    Added { value: String },
    Removed { value: String },
    Equal { value: String },
}

impl CharSegment {
    pub fn value(&self) -> &str {
        match self {
            CharSegment::Added { value }
            | CharSegment::Removed { value }
            | CharSegment::Equal { value } => value,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, CharSegment::Added { .. })
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, CharSegment::Removed { .. })
    }
}
