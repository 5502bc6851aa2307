use crate::artifacts::diff::edit::{Edit, Run, group_runs};
use std::ops::{Index, IndexMut, Range};

/// A shortest-edit-script search over two token sequences.
///
/// Implementors only need to produce the edit path; mapping it back onto the
/// tokens and grouping the result into runs is shared.
pub trait DiffAlgorithm<'d, T: 'd> {
    type EditPath;

    fn edit_path(&self) -> Self::EditPath;
    fn diff(&self) -> Vec<Edit<&'d T>>;

    fn runs(&self) -> Vec<Run<&'d T>> {
        group_runs(self.diff())
    }

    /// Number of inserted plus deleted tokens in the script.
    fn distance(&self) -> usize {
        self.diff()
            .iter()
            .filter(|edit| !matches!(edit, Edit::Equal { .. }))
            .count()
    }
}

/// One step of an edit script, by token position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Equal { old: usize, new: usize },
    Delete { old: usize },
    Insert { new: usize },
}

/// Resolves an edit path against the sequences it was computed for.
pub fn edits<'d, T>(steps: &[Step], a: &'d [T], b: &'d [T]) -> Vec<Edit<&'d T>> {
    steps
        .iter()
        .map(|step| match *step {
            Step::Equal { old, new } => Edit::Equal {
                old: &a[old],
                new: &b[new],
            },
            Step::Delete { old } => Edit::Delete { value: &a[old] },
            Step::Insert { new } => Edit::Insert { value: &b[new] },
        })
        .collect()
}

/// Moves every deletion ahead of the insertions it shares a change with.
///
/// The order of deletions and of insertions among themselves is kept, so the
/// script still rebuilds both sides and its length is unchanged.
pub(crate) fn deletions_first(steps: Vec<Step>) -> Vec<Step> {
    let mut ordered = Vec::with_capacity(steps.len());
    let mut inserts = Vec::new();

    for step in steps {
        match step {
            Step::Delete { .. } => ordered.push(step),
            Step::Insert { .. } => inserts.push(step),
            Step::Equal { .. } => {
                ordered.append(&mut inserts);
                ordered.push(step);
            }
        }
    }
    ordered.append(&mut inserts);

    ordered
}

/// Furthest reaching x per diagonal `k`, for `k` in `-max..=max`.
struct Frontier {
    offset: isize,
    cells: Vec<isize>,
}

impl Frontier {
    fn new(max: usize) -> Self {
        Self {
            offset: max as isize,
            cells: vec![0; 2 * max + 1],
        }
    }
}

impl Index<isize> for Frontier {
    type Output = isize;

    fn index(&self, k: isize) -> &isize {
        &self.cells[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for Frontier {
    fn index_mut(&mut self, k: isize) -> &mut isize {
        &mut self.cells[(k + self.offset) as usize]
    }
}

/// Upper bound on the rounds either half of the middle snake search needs.
fn max_rounds(n: usize, m: usize) -> usize {
    (n + m).div_ceil(2) + 1
}

/// Myers' O((N+M)D) shortest edit script search in linear space.
///
/// Each step looks for the middle snake of the remaining window by running
/// the greedy search from both ends at once, then recurses on the two halves
/// around it. Only two frontiers are kept, sized for the whole input and
/// shared by every level of the recursion.
///
/// Token equality is a predicate rather than `PartialEq` so that callers can
/// compare normalised views of a token (e.g. trimmed lines) while the script
/// still hands back the original tokens.
#[derive(Debug, Clone)]
pub struct MyersDiff<'d, T, F = fn(&T, &T) -> bool> {
    a: &'d [T],
    b: &'d [T],
    eq: F,
}

impl<'d, T: PartialEq> MyersDiff<'d, T> {
    pub fn new(a: &'d [T], b: &'d [T]) -> Self {
        Self {
            a,
            b,
            eq: <T as PartialEq>::eq,
        }
    }
}

impl<'d, T, F> MyersDiff<'d, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn with_equality(a: &'d [T], b: &'d [T], eq: F) -> Self {
        Self { a, b, eq }
    }

    fn matches(&self, x: usize, y: usize) -> bool {
        (self.eq)(&self.a[x], &self.b[y])
    }

    fn conquer(
        &self,
        mut old: Range<usize>,
        mut new: Range<usize>,
        forward: &mut Frontier,
        backward: &mut Frontier,
        steps: &mut Vec<Step>,
    ) {
        while !old.is_empty() && !new.is_empty() && self.matches(old.start, new.start) {
            steps.push(Step::Equal {
                old: old.start,
                new: new.start,
            });
            old.start += 1;
            new.start += 1;
        }

        let mut suffix = 0;
        while old.end - suffix > old.start
            && new.end - suffix > new.start
            && self.matches(old.end - suffix - 1, new.end - suffix - 1)
        {
            suffix += 1;
        }
        old.end -= suffix;
        new.end -= suffix;

        if old.is_empty() {
            steps.extend(new.clone().map(|new| Step::Insert { new }));
        } else if new.is_empty() {
            steps.extend(old.clone().map(|old| Step::Delete { old }));
        } else if let Some((x, y)) = self.middle_snake(old.clone(), new.clone(), forward, backward)
        {
            self.conquer(old.start..x, new.start..y, forward, backward, steps);
            self.conquer(x..old.end, y..new.end, forward, backward, steps);
        } else {
            steps.extend(old.clone().map(|old| Step::Delete { old }));
            steps.extend(new.clone().map(|new| Step::Insert { new }));
        }

        steps.extend((0..suffix).map(|i| Step::Equal {
            old: old.end + i,
            new: new.end + i,
        }));
    }

    /// A point on some shortest path through the window that splits its edit
    /// distance roughly in half.
    fn middle_snake(
        &self,
        old: Range<usize>,
        new: Range<usize>,
        forward: &mut Frontier,
        backward: &mut Frontier,
    ) -> Option<(usize, usize)> {
        let (n, m) = (old.len() as isize, new.len() as isize);
        let delta = n - m;
        let odd = delta % 2 != 0;

        forward[1] = 0;
        backward[1] = 0;

        for d in 0..max_rounds(old.len(), new.len()) as isize {
            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && forward[k - 1] < forward[k + 1]) {
                    forward[k + 1]
                } else {
                    forward[k - 1] + 1
                };
                let mut y = x - k;
                let (x0, y0) = (x, y);

                while x < n
                    && y < m
                    && self.matches(old.start + x as usize, new.start + y as usize)
                {
                    x += 1;
                    y += 1;
                }
                forward[k] = x;

                if odd && (k - delta).abs() < d && x + backward[delta - k] >= n {
                    return Some((old.start + x0 as usize, new.start + y0 as usize));
                }
            }

            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && backward[k - 1] < backward[k + 1]) {
                    backward[k + 1]
                } else {
                    backward[k - 1] + 1
                };
                let mut y = x - k;

                while x < n
                    && y < m
                    && self.matches(old.end - 1 - x as usize, new.end - 1 - y as usize)
                {
                    x += 1;
                    y += 1;
                }
                backward[k] = x;

                if !odd && (k - delta).abs() <= d && x + forward[delta - k] >= n {
                    return Some((old.end - x as usize, new.end - y as usize));
                }
            }
        }

        None
    }
}

impl<'d, T, F> DiffAlgorithm<'d, T> for MyersDiff<'d, T, F>
where
    T: 'd,
    F: Fn(&T, &T) -> bool,
{
    type EditPath = Vec<Step>;

    /// Ties go to deletions: within every change they precede the insertions.
    fn edit_path(&self) -> Self::EditPath {
        let (n, m) = (self.a.len(), self.b.len());
        let max = max_rounds(n, m);
        let mut forward = Frontier::new(max);
        let mut backward = Frontier::new(max);
        let mut steps = Vec::with_capacity(n.max(m));

        self.conquer(0..n, 0..m, &mut forward, &mut backward, &mut steps);

        deletions_first(steps)
    }

    fn diff(&self) -> Vec<Edit<&'d T>> {
        edits(&self.edit_path(), self.a, self.b)
    }
}
