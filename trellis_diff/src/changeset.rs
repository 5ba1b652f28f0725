// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The four-list description of the difference between two snapshots.

use alloc::vec::Vec;
use bitflags::bitflags;

/// A keyed element that changed position relative to the other matched
/// elements.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    /// Index of the element in the old snapshot.
    pub from: usize,
    /// Index of the element in the new snapshot.
    pub to: usize,
}

/// A keyed element that kept its relative order but whose content changed.
///
/// Both coordinates are carried: widgets express reloads in pre-batch (old)
/// indices, while hosts substituting content in an already-reconstructed
/// sequence need the post-batch (new) index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Update {
    /// Index of the element in the old snapshot.
    pub old: usize,
    /// Index of the element in the new snapshot.
    pub new: usize,
}

bitflags! {
    /// Summary of which operation lists a [`ChangeSet`] populates.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct ChangeKinds: u8 {
        /// At least one deletion.
        const DELETIONS = 1 << 0;
        /// At least one insertion.
        const INSERTIONS = 1 << 1;
        /// At least one move.
        const MOVES = 1 << 2;
        /// At least one update.
        const UPDATES = 1 << 3;
    }
}

/// The output of one diff invocation: four disjoint operation lists.
///
/// Deletions index into the old snapshot (ascending); insertions index into
/// the new snapshot (ascending); moves pair an old with a new index; updates
/// carry both (see [`Update`]). Elements that matched by key and kept both
/// order and content appear in no list.
///
/// An element present in both snapshots is classified into exactly one of
/// no-op, update, or move. When both its order and its content changed, the
/// move wins and the content change is not reported separately; hosts
/// re-bind moved rows on their next dequeue.
///
/// A `ChangeSet` is transient: produced fresh per reload cycle, consumed by
/// the batch translation, then discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Old indices of removed elements, ascending.
    pub deletions: Vec<usize>,
    /// New indices of added elements, ascending.
    pub insertions: Vec<usize>,
    /// Elements whose relative order changed.
    pub moves: Vec<Move>,
    /// Elements whose content changed in place.
    pub updates: Vec<Update>,
}

impl ChangeSet {
    /// Returns `true` if no operation of any kind was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty()
            && self.insertions.is_empty()
            && self.moves.is_empty()
            && self.updates.is_empty()
    }

    /// Total number of recorded operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deletions.len() + self.insertions.len() + self.moves.len() + self.updates.len()
    }

    /// Returns the populated operation kinds.
    #[must_use]
    pub fn kinds(&self) -> ChangeKinds {
        let mut kinds = ChangeKinds::empty();
        if !self.deletions.is_empty() {
            kinds |= ChangeKinds::DELETIONS;
        }
        if !self.insertions.is_empty() {
            kinds |= ChangeKinds::INSERTIONS;
        }
        if !self.moves.is_empty() {
            kinds |= ChangeKinds::MOVES;
        }
        if !self.updates.is_empty() {
            kinds |= ChangeKinds::UPDATES;
        }
        kinds
    }
}
