// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The keyed diff between two ordered snapshots.

use alloc::vec;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::{ChangeSet, Diffable, Move, Update};

/// Computes the [`ChangeSet`] turning `old` into `new`.
///
/// Matching is by [`Diffable::diff_key`]; content changes on matched
/// elements are detected with [`Diffable::content_eq`]. The function is pure
/// and total: it never fails and never mutates its inputs. Duplicate keys
/// within one snapshot degrade to the first-match-wins policy documented on
/// [`Diffable`].
///
/// ## Move detection
///
/// A matched element is reported as a move only if placing it would violate
/// the monotonically increasing sequence of old indices already placed by
/// earlier matches; elements that kept their relative order are left as
/// in-place matches (possibly flagged as updates). This avoids reporting
/// spurious moves for elements that merely shifted because of surrounding
/// insertions or deletions:
///
/// ```
/// use trellis_diff::{Diffable, diff};
///
/// #[derive(Clone, Copy)]
/// struct Id(char);
///
/// impl Diffable for Id {
///     type Key = char;
///     fn diff_key(&self) -> char {
///         self.0
///     }
///     fn content_eq(&self, _: &Self) -> bool {
///         true
///     }
/// }
///
/// // `b` and `c` shift down one slot, but only `a`'s removal is reported.
/// let changes = diff(&[Id('a'), Id('b'), Id('c')], &[Id('b'), Id('c')]);
/// assert_eq!(changes.deletions, [0]);
/// assert!(changes.moves.is_empty());
/// ```
#[must_use]
pub fn diff<T: Diffable>(old: &[T], new: &[T]) -> ChangeSet {
    let mut old_index: HashMap<T::Key, usize> = HashMap::with_capacity(old.len());
    for (i, element) in old.iter().enumerate() {
        // First occurrence wins under duplicate keys.
        old_index.entry(element.diff_key()).or_insert(i);
    }

    let mut consumed = vec![false; old.len()];
    let mut insertions = Vec::new();
    let mut moves = Vec::new();
    let mut updates = Vec::new();

    // Highest old index placed in order so far; matches landing below it
    // are out of sequence and therefore moves.
    let mut watermark: Option<usize> = None;

    for (j, element) in new.iter().enumerate() {
        let matched = old_index
            .get(&element.diff_key())
            .copied()
            .filter(|&i| !consumed[i]);
        let Some(i) = matched else {
            insertions.push(j);
            continue;
        };
        consumed[i] = true;

        if watermark.is_some_and(|placed| i < placed) {
            // Moved elements do not advance the watermark; they sit outside
            // the order-preserving chain.
            moves.push(Move { from: i, to: j });
        } else {
            watermark = Some(i);
            if !element.content_eq(&old[i]) {
                updates.push(Update { old: i, new: j });
            }
        }
    }

    let deletions = consumed
        .iter()
        .enumerate()
        .filter(|&(_, &used)| !used)
        .map(|(i, _)| i)
        .collect();

    ChangeSet {
        deletions,
        insertions,
        moves,
        updates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// Identity-keyed element with separately mutable content.
    #[derive(Clone, Debug, PartialEq, Eq)]
    struct El {
        key: &'static str,
        version: u32,
    }

    fn el(key: &'static str) -> El {
        El { key, version: 0 }
    }

    fn el_v(key: &'static str, version: u32) -> El {
        El { key, version }
    }

    impl Diffable for El {
        type Key = &'static str;

        fn diff_key(&self) -> &'static str {
            self.key
        }

        fn content_eq(&self, other: &Self) -> bool {
            self.version == other.version
        }
    }

    fn keys(elements: &[El]) -> Vec<&'static str> {
        elements.iter().map(|e| e.key).collect()
    }

    #[test]
    fn identical_sequences_yield_empty_changeset() {
        // Scenario A.
        let old = [el("a"), el("b"), el("c")];
        let changes = diff(&old, &old);
        assert!(changes.is_empty());
    }

    #[test]
    fn swapped_pair_is_one_move() {
        // Scenario B: the element that left the monotonic chain moves.
        let old = [el("a"), el("b"), el("c")];
        let new = [el("b"), el("a"), el("c")];
        let changes = diff(&old, &new);
        assert!(changes.deletions.is_empty());
        assert!(changes.insertions.is_empty());
        assert_eq!(changes.moves, [Move { from: 0, to: 1 }]);
        assert!(changes.updates.is_empty());
    }

    #[test]
    fn insertion_in_the_middle() {
        // Scenario C.
        let old = [el("a"), el("b")];
        let new = [el("a"), el("c"), el("b")];
        let changes = diff(&old, &new);
        assert!(changes.deletions.is_empty());
        assert_eq!(changes.insertions, [1]);
        assert!(changes.moves.is_empty());
    }

    #[test]
    fn deletion_in_the_middle() {
        // Scenario D.
        let old = [el("a"), el("b"), el("c")];
        let new = [el("a"), el("c")];
        let changes = diff(&old, &new);
        assert_eq!(changes.deletions, [1]);
        assert!(changes.insertions.is_empty());
        assert!(changes.moves.is_empty());
    }

    #[test]
    fn content_change_is_an_update() {
        // Scenario E.
        let old = [el_v("a", 1)];
        let new = [el_v("a", 2)];
        let changes = diff(&old, &new);
        assert!(changes.deletions.is_empty());
        assert!(changes.insertions.is_empty());
        assert!(changes.moves.is_empty());
        assert_eq!(changes.updates, [Update { old: 0, new: 0 }]);
    }

    #[test]
    fn empty_old_is_all_insertions() {
        let new = [el("a"), el("b")];
        let changes = diff(&[], &new);
        assert_eq!(changes.insertions, [0, 1]);
        assert!(changes.deletions.is_empty());
    }

    #[test]
    fn empty_new_is_all_deletions() {
        let old = [el("a"), el("b")];
        let changes = diff(&old, &[]);
        assert_eq!(changes.deletions, [0, 1]);
        assert!(changes.insertions.is_empty());
    }

    #[test]
    fn moved_and_changed_element_is_reported_as_move_only() {
        let old = [el_v("a", 1), el("b")];
        let new = [el("b"), el_v("a", 2)];
        let changes = diff(&old, &new);
        assert_eq!(changes.moves, [Move { from: 0, to: 1 }]);
        assert!(changes.updates.is_empty());
    }

    #[test]
    fn move_to_front_reports_the_displaced_chain() {
        let old = [el("a"), el("b"), el("c"), el("d")];
        let new = [el("d"), el("a"), el("b"), el("c")];
        let changes = diff(&old, &new);
        assert!(changes.deletions.is_empty());
        assert!(changes.insertions.is_empty());
        // `d` anchors the chain first; everything after it lands below old
        // index 3 and is reported as a move.
        assert_eq!(
            changes.moves,
            [
                Move { from: 0, to: 1 },
                Move { from: 1, to: 2 },
                Move { from: 2, to: 3 },
            ]
        );
    }

    #[test]
    fn duplicate_keys_match_first_and_insert_the_rest() {
        let old = [el_v("a", 1), el_v("a", 2)];
        let new = [el_v("a", 1), el_v("a", 1)];
        let changes = diff(&old, &new);
        // First `a` in new matches the first `a` in old; the second is an
        // insertion and the unmatched old duplicate is a deletion.
        assert_eq!(changes.insertions, [1]);
        assert_eq!(changes.deletions, [1]);
        assert!(changes.moves.is_empty());
        assert!(changes.updates.is_empty());
    }

    #[test]
    fn matched_keys_never_appear_as_deletion_or_insertion() {
        let old = [el("a"), el("b"), el("c"), el("d")];
        let new = [el("c"), el_v("a", 7), el("e")];
        let changes = diff(&old, &new);
        let deleted: Vec<&str> = changes.deletions.iter().map(|&i| old[i].key).collect();
        let inserted: Vec<&str> = changes.insertions.iter().map(|&j| new[j].key).collect();
        for shared in ["a", "c"] {
            assert!(!deleted.contains(&shared), "shared key {shared} deleted");
            assert!(!inserted.contains(&shared), "shared key {shared} inserted");
        }
    }

    #[test]
    fn count_symmetry_holds() {
        let cases: [(&[El], &[El]); 4] = [
            (&[el("a"), el("b"), el("c")], &[el("b"), el("d")]),
            (&[], &[el("a")]),
            (&[el("a")], &[]),
            (
                &[el("a"), el("b"), el("c"), el("d")],
                &[el("d"), el("c"), el("b"), el("a")],
            ),
        ];
        for (old, new) in cases {
            let changes = diff(old, new);
            assert_eq!(
                old.len() - changes.deletions.len() + changes.insertions.len(),
                new.len(),
                "count symmetry violated for old={:?} new={:?}",
                keys(old),
                keys(new),
            );
        }
    }

    #[test]
    fn replay_reconstructs_new_key_order() {
        let cases: [(&[El], &[El]); 6] = [
            (&[el("a"), el("b"), el("c")], &[el("b"), el("a"), el("c")]),
            (&[el("a"), el("b")], &[el("a"), el("c"), el("b")]),
            (&[el("a"), el("b"), el("c")], &[el("a"), el("c")]),
            (
                &[el("a"), el("b"), el("c"), el("d")],
                &[el("d"), el("b"), el("e"), el("a")],
            ),
            (&[], &[el("x"), el("y")]),
            (
                &[el("a"), el("b"), el("c"), el("d"), el("e")],
                &[el("e"), el("d"), el("c"), el("b"), el("a")],
            ),
        ];
        for (old, new) in cases {
            let changes = diff(old, new);
            let rebuilt = crate::apply(old, new, &changes);
            assert_eq!(
                keys(&rebuilt),
                keys(new),
                "replay mismatch for old={:?} new={:?} changes={changes:?}",
                keys(old),
                keys(new),
            );
        }
    }
}
