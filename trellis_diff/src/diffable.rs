// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The identity contract elements must satisfy to be diffable.

use core::hash::Hash;

/// An element with a stable identity and a content-equality test.
///
/// Two elements from different snapshots are the *same logical entity* iff
/// their keys are equal, even when their content differs (which flags an
/// update rather than a delete + insert) or their position differs (which
/// flags a move). [`content_eq`](Self::content_eq) is consulted only after a
/// key match, never for matching itself.
///
/// ## Key stability and uniqueness
///
/// The key must be stable for the lifetime of the logical entity. Within one
/// snapshot, keys must be unique; this is a caller-enforced invariant.
/// Violating it does not panic but degrades to a deterministic
/// first-match-wins policy: the first occurrence of a key in the old snapshot
/// is the one matched, and later occurrences of that key in the new snapshot
/// are reported as insertions. Do not rely on that shape — treat duplicate
/// keys as a bug in the caller.
pub trait Diffable {
    /// Stable identity of the element.
    type Key: Eq + Hash + Clone;

    /// Returns the element's key.
    fn diff_key(&self) -> Self::Key;

    /// Returns `true` if the two elements' content is equal.
    ///
    /// Used to decide between a no-op and an update for key-matched
    /// elements. Implementations should be reflexive; [`crate::diff`] with
    /// `old == new` reports an empty change set only when they are.
    fn content_eq(&self, other: &Self) -> bool;
}
