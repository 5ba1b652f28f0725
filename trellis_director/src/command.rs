// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mutation-command vocabulary submitted to the hosting widget.

use smallvec::SmallVec;
use trellis_sections::StructureChanges;

use crate::{IndexPath, ReloadAnimations};

/// One visual mutation command inside an atomic batch.
///
/// Index conventions follow the batching rules widgets document for
/// combining section and row operations in one pass:
///
/// - deletions and reloads use *pre-batch* (old) indices,
/// - insertions use *post-batch* (new) indices,
/// - moves pair an old index with a new index, never delete + insert,
/// - item commands are scoped to their section's *post-mutation* index, and
///   are only ever emitted for sections that exist in both the old and the
///   new structure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BatchCommand {
    /// Insert a section at a post-batch index.
    InsertSection {
        /// Post-batch section index.
        at: usize,
    },
    /// Delete the section at a pre-batch index.
    DeleteSection {
        /// Pre-batch section index.
        at: usize,
    },
    /// Move a section from a pre-batch index to a post-batch index.
    MoveSection {
        /// Pre-batch section index.
        from: usize,
        /// Post-batch section index.
        to: usize,
    },
    /// Reload the section at a pre-batch index (its own attributes changed).
    ReloadSection {
        /// Pre-batch section index.
        at: usize,
    },
    /// Insert an item at a post-batch path.
    InsertItem {
        /// Post-batch item path.
        at: IndexPath,
    },
    /// Delete the item at a pre-batch item index (post-mutation section).
    DeleteItem {
        /// Pre-batch item index within the post-mutation section.
        at: IndexPath,
    },
    /// Move an item between two paths within the post-mutation section.
    MoveItem {
        /// Pre-batch item index within the post-mutation section.
        from: IndexPath,
        /// Post-batch item path.
        to: IndexPath,
    },
    /// Reload the item at a pre-batch item index (post-mutation section).
    ReloadItem {
        /// Pre-batch item index within the post-mutation section.
        at: IndexPath,
    },
}

/// An atomic group of mutation commands plus the animation policy to apply
/// them with.
///
/// A batch is transient: built from one [`StructureChanges`], handed to the
/// sink, then discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Batch {
    /// Commands to apply atomically, in emission order. The order is
    /// deterministic but informational: the sink applies the whole batch as
    /// one transaction.
    pub commands: SmallVec<[BatchCommand; 8]>,
    /// Animation policy for this batch.
    pub animations: ReloadAnimations,
}

impl Batch {
    /// Translates structure changes into one atomic command batch.
    ///
    /// Section operations come first (reloads, deletions descending,
    /// insertions ascending, moves), followed by each surviving section's
    /// item operations in the same kind order.
    #[must_use]
    pub fn from_changes(changes: &StructureChanges, animations: ReloadAnimations) -> Self {
        let mut commands = SmallVec::new();

        let sections = &changes.sections;
        for update in &sections.updates {
            commands.push(BatchCommand::ReloadSection { at: update.old });
        }
        for &at in sections.deletions.iter().rev() {
            commands.push(BatchCommand::DeleteSection { at });
        }
        for &at in &sections.insertions {
            commands.push(BatchCommand::InsertSection { at });
        }
        for m in &sections.moves {
            commands.push(BatchCommand::MoveSection {
                from: m.from,
                to: m.to,
            });
        }

        for per_section in &changes.items {
            let section = per_section.section;
            let items = &per_section.changes;
            for update in &items.updates {
                commands.push(BatchCommand::ReloadItem {
                    at: IndexPath::new(section, update.old),
                });
            }
            for &item in items.deletions.iter().rev() {
                commands.push(BatchCommand::DeleteItem {
                    at: IndexPath::new(section, item),
                });
            }
            for &item in &items.insertions {
                commands.push(BatchCommand::InsertItem {
                    at: IndexPath::new(section, item),
                });
            }
            for m in &items.moves {
                commands.push(BatchCommand::MoveItem {
                    from: IndexPath::new(section, m.from),
                    to: IndexPath::new(section, m.to),
                });
            }
        }

        Self {
            commands,
            animations,
        }
    }

    /// Returns `true` if the batch carries no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of commands in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }
}
