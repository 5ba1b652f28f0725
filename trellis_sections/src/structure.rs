// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-level diffing over a list of sections.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use trellis_diff::{ChangeSet, Diffable, diff};

use crate::Section;

/// Item-level changes for one section surviving in both snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionItemChanges {
    /// Index of the section in the *post-mutation* structure.
    pub section: usize,
    /// The item change set within that section.
    pub changes: ChangeSet,
}

/// Section-level plus item-level changes between two structure snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StructureChanges {
    /// Changes to the section list itself. Section updates mean the
    /// section's own attributes (header, footer, ...) changed.
    pub sections: ChangeSet,
    /// Per-section item changes, one entry per surviving section with a
    /// non-empty change set.
    pub items: Vec<SectionItemChanges>,
}

impl StructureChanges {
    /// Returns `true` if nothing changed at either level.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.items.is_empty()
    }
}

/// Diffs two snapshots of a section list at section and item granularity.
///
/// Sections are matched by key. For every section present in both
/// snapshots — moved sections included — the section's old and new item
/// lists are diffed and the result is scoped to the section's post-mutation
/// index. Sections that are pure insertions or deletions at section level
/// are skipped at item level: their entire item list is covered by the
/// section operation, so nothing is double-reported.
#[must_use]
pub fn diff_structure<T: Diffable>(old: &[Section<T>], new: &[Section<T>]) -> StructureChanges {
    let sections = diff(old, new);

    let mut old_by_key: BTreeMap<&str, &Section<T>> = BTreeMap::new();
    for section in old {
        // First occurrence wins under duplicate keys, as in the element diff.
        old_by_key.entry(section.key()).or_insert(section);
    }

    let mut items = Vec::new();
    for (index, section) in new.iter().enumerate() {
        let Some(old_section) = old_by_key.remove(section.key()) else {
            continue; // inserted wholesale; covered at section level
        };
        let changes = diff(old_section.items(), section.items());
        if !changes.is_empty() {
            items.push(SectionItemChanges {
                section: index,
                changes,
            });
        }
    }

    StructureChanges { sections, items }
}
