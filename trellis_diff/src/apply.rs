// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference application of a [`ChangeSet`] to a plain sequence.

use alloc::vec;
use alloc::vec::Vec;

use crate::ChangeSet;

/// Applies `changes` to a copy of `old`, producing the new sequence.
///
/// Uses the same atomic semantics a batching widget uses: all removals
/// (deletions plus move sources) are taken in pre-batch coordinates, all
/// additions (insertions plus move destinations) in post-batch coordinates,
/// and updates substitute the new content in place afterwards. Inserted and
/// updated elements are cloned out of `new`.
///
/// Out-of-range indices in `changes` are skipped; a [`ChangeSet`] produced
/// by [`crate::diff`] over the same `old`/`new` pair never contains any.
/// Hosts whose widget offers no animated batch facility can use this as
/// their entire "apply" step.
#[must_use]
pub fn apply<T: Clone>(old: &[T], new: &[T], changes: &ChangeSet) -> Vec<T> {
    // Pre-batch pass: drop deleted elements and lift out move sources.
    let mut removed = vec![false; old.len()];
    for &i in &changes.deletions {
        if let Some(slot) = removed.get_mut(i) {
            *slot = true;
        }
    }
    for m in &changes.moves {
        if let Some(slot) = removed.get_mut(m.from) {
            *slot = true;
        }
    }
    let mut result: Vec<T> = old
        .iter()
        .enumerate()
        .filter(|&(i, _)| !removed[i])
        .map(|(_, element)| element.clone())
        .collect();

    // Post-batch pass: weave insertions and moved elements back in by
    // destination index, ascending, so each index is final on arrival.
    let mut incoming: Vec<(usize, T)> =
        Vec::with_capacity(changes.insertions.len() + changes.moves.len());
    for &j in &changes.insertions {
        if let Some(element) = new.get(j) {
            incoming.push((j, element.clone()));
        }
    }
    for m in &changes.moves {
        if let Some(element) = old.get(m.from) {
            incoming.push((m.to, element.clone()));
        }
    }
    incoming.sort_unstable_by_key(|&(j, _)| j);
    for (j, element) in incoming {
        let j = j.min(result.len());
        result.insert(j, element);
    }

    for u in &changes.updates {
        if let (Some(element), Some(slot)) = (new.get(u.new), result.get_mut(u.new)) {
            *slot = element.clone();
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Diffable, Move, Update, diff};
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Tagged {
        key: u32,
        tag: String,
    }

    fn t(key: u32, tag: &str) -> Tagged {
        Tagged {
            key,
            tag: tag.to_string(),
        }
    }

    impl Diffable for Tagged {
        type Key = u32;

        fn diff_key(&self) -> u32 {
            self.key
        }

        fn content_eq(&self, other: &Self) -> bool {
            self.tag == other.tag
        }
    }

    #[test]
    fn applies_mixed_operations() {
        let old = [t(1, "a"), t(2, "b"), t(3, "c"), t(4, "d")];
        let new = [t(4, "d"), t(2, "b"), t(5, "e")];
        let rebuilt = apply(&old, &new, &diff(&old, &new));
        assert_eq!(rebuilt, new);
    }

    #[test]
    fn moved_element_keeps_old_content() {
        // Move wins over update, so the moved element carries its old
        // content until the host re-binds it.
        let old = [t(1, "a"), t(2, "b")];
        let new = [t(2, "b"), t(1, "aa")];
        let rebuilt = apply(&old, &new, &diff(&old, &new));
        let keys: Vec<u32> = rebuilt.iter().map(|e| e.key).collect();
        assert_eq!(keys, [2, 1]);
        assert_eq!(rebuilt[1].tag, "a");
    }

    #[test]
    fn updates_substitute_new_content() {
        let old = [t(1, "a"), t(2, "b")];
        let new = [t(1, "a2"), t(2, "b")];
        let changes = diff(&old, &new);
        assert_eq!(changes.updates, [Update { old: 0, new: 0 }]);
        assert_eq!(apply(&old, &new, &changes), new);
    }

    #[test]
    fn empty_changeset_is_identity() {
        let old = [t(1, "a"), t(2, "b")];
        let rebuilt = apply(&old, &old, &ChangeSet::default());
        assert_eq!(rebuilt, old);
    }

    #[test]
    fn out_of_range_operations_are_skipped() {
        let old = [t(1, "a")];
        let changes = ChangeSet {
            deletions: Vec::from([7]),
            insertions: Vec::from([9]),
            moves: Vec::from([Move { from: 5, to: 0 }]),
            updates: Vec::from([Update { old: 3, new: 3 }]),
        };
        // Nothing valid to do; the input survives unchanged.
        assert_eq!(apply(&old, &old, &changes), old);
    }
}
