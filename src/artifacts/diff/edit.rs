/// A single token-level step of an edit script.
///
/// `Equal` keeps both sides of the match: under a relaxed equality predicate
/// (e.g. whitespace-insensitive lines) the two tokens may differ textually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { old: T, new: T },
}

/// A maximal span of consecutive edits sharing one classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run<T> {
    Delete { values: Vec<T> },
    Insert { values: Vec<T> },
    Equal { old: Vec<T>, new: Vec<T> },
}

impl<T> Run<T> {
    /// Number of tokens this run consumes from the left (original) sequence.
    pub fn old_len(&self) -> usize {
        match self {
            Run::Delete { values } => values.len(),
            Run::Insert { .. } => 0,
            Run::Equal { old, .. } => old.len(),
        }
    }

    /// Number of tokens this run consumes from the right (modified) sequence.
    pub fn new_len(&self) -> usize {
        match self {
            Run::Delete { .. } => 0,
            Run::Insert { values } => values.len(),
            Run::Equal { new, .. } => new.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.old_len() == 0 && self.new_len() == 0
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, Run::Equal { .. })
    }

    /// Appends `edit` if it has the same classification, otherwise hands it back.
    fn absorb(&mut self, edit: Edit<T>) -> Option<Edit<T>> {
        match (self, edit) {
            (Run::Delete { values }, Edit::Delete { value }) => values.push(value),
            (Run::Insert { values }, Edit::Insert { value }) => values.push(value),
            (Run::Equal { old, new }, Edit::Equal { old: o, new: n }) => {
                old.push(o);
                new.push(n);
            }
            (_, edit) => return Some(edit),
        }

        None
    }
}

impl<T> From<Edit<T>> for Run<T> {
    fn from(edit: Edit<T>) -> Self {
        match edit {
            Edit::Delete { value } => Run::Delete {
                values: vec![value],
            },
            Edit::Insert { value } => Run::Insert {
                values: vec![value],
            },
            Edit::Equal { old, new } => Run::Equal {
                old: vec![old],
                new: vec![new],
            },
        }
    }
}

/// Collapses an edit script into maximal runs, preserving order.
pub fn group_runs<T>(edits: impl IntoIterator<Item = Edit<T>>) -> Vec<Run<T>> {
    let mut runs: Vec<Run<T>> = Vec::new();

    for edit in edits {
        let leftover = match runs.last_mut() {
            Some(run) => run.absorb(edit),
            None => Some(edit),
        };

        if let Some(edit) = leftover {
            runs.push(edit.into());
        }
    }

    runs
}
