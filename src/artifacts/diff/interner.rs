use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, MyersDiff, Step, deletions_first};
use std::collections::HashMap;

/// Dense ids for token keys; equal keys share an id.
///
/// Aligning ids instead of strings turns every comparison in the search into
/// an integer compare, and lets tokens that only one side contains be set
/// aside before the search starts.
#[derive(Debug, Default)]
pub struct Interner<'s> {
    ids: HashMap<&'s str, usize>,
}

impl<'s> Interner<'s> {
    pub fn intern(&mut self, key: &'s str) -> usize {
        let next = self.ids.len();
        *self.ids.entry(key).or_insert(next)
    }

    pub fn intern_all(&mut self, keys: impl IntoIterator<Item = &'s str>) -> Vec<usize> {
        keys.into_iter().map(|key| self.intern(key)).collect()
    }

    fn len(&self) -> usize {
        self.ids.len()
    }

    /// Shortest edit path between two sequences of ids from this interner.
    ///
    /// An id missing from the other side can never be matched, so it is
    /// dropped from the search and written back afterwards as a deletion or
    /// insertion in place. Disjoint inputs never reach the search at all.
    pub fn align(&self, old: &[usize], new: &[usize]) -> Vec<Step> {
        let mut in_old = vec![false; self.len()];
        let mut in_new = vec![false; self.len()];
        old.iter().for_each(|&id| in_old[id] = true);
        new.iter().for_each(|&id| in_new[id] = true);

        let old_kept = (0..old.len()).filter(|&i| in_new[old[i]]).collect::<Vec<_>>();
        let new_kept = (0..new.len()).filter(|&j| in_old[new[j]]).collect::<Vec<_>>();
        let old_ids = old_kept.iter().map(|&i| old[i]).collect::<Vec<_>>();
        let new_ids = new_kept.iter().map(|&j| new[j]).collect::<Vec<_>>();

        let mut steps = Vec::with_capacity(old.len() + new.len());
        let (mut next_old, mut next_new) = (0, 0);

        for step in MyersDiff::new(&old_ids, &new_ids).edit_path() {
            match step {
                Step::Equal { old: i, new: j } => {
                    let (i, j) = (old_kept[i], new_kept[j]);
                    delete_until(&mut steps, &mut next_old, i);
                    insert_until(&mut steps, &mut next_new, j);
                    steps.push(Step::Equal { old: i, new: j });
                    (next_old, next_new) = (i + 1, j + 1);
                }
                Step::Delete { old: i } => {
                    let i = old_kept[i];
                    delete_until(&mut steps, &mut next_old, i);
                    steps.push(Step::Delete { old: i });
                    next_old = i + 1;
                }
                Step::Insert { new: j } => {
                    let j = new_kept[j];
                    insert_until(&mut steps, &mut next_new, j);
                    steps.push(Step::Insert { new: j });
                    next_new = j + 1;
                }
            }
        }
        delete_until(&mut steps, &mut next_old, old.len());
        insert_until(&mut steps, &mut next_new, new.len());

        deletions_first(steps)
    }
}

fn delete_until(steps: &mut Vec<Step>, next: &mut usize, end: usize) {
    steps.extend((*next..end).map(|old| Step::Delete { old }));
    *next = (*next).max(end);
}

fn insert_until(steps: &mut Vec<Step>, next: &mut usize, end: usize) {
    steps.extend((*next..end).map(|new| Step::Insert { new }));
    *next = (*next).max(end);
}
