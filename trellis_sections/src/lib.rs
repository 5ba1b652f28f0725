// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Sections: the sectioned data model behind declarative list/grid UIs.
//!
//! A [`Section`] is an ordered group of items with optional header/footer
//! descriptors, itself identified by a stable key so that whole sections can
//! be diffed like any other element. [`diff_structure`] compares two
//! snapshots of a section list at both granularities:
//!
//! - section level: sections inserted, deleted, moved, or with changed
//!   accessories,
//! - item level: for every section surviving in both snapshots, the change
//!   set of its items, scoped to the section's post-mutation index.
//!
//! Sections that are inserted or deleted wholesale are skipped at item
//! level — their items are covered by the section operation alone, so no
//! change is ever double-reported.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_diff::Diffable;
//! use trellis_sections::{Section, diff_structure};
//!
//! #[derive(Clone)]
//! struct Todo(u32);
//!
//! impl Diffable for Todo {
//!     type Key = u32;
//!     fn diff_key(&self) -> u32 {
//!         self.0
//!     }
//!     fn content_eq(&self, _: &Self) -> bool {
//!         true
//!     }
//! }
//!
//! let old = [Section::new("inbox", [Todo(1), Todo(2)])];
//! let mut new = old.clone();
//! new[0].push(Todo(3));
//!
//! let changes = diff_structure(&old, &new);
//! assert!(changes.sections.is_empty());
//! assert_eq!(changes.items.len(), 1);
//! assert_eq!(changes.items[0].section, 0);
//! assert_eq!(changes.items[0].changes.insertions, [2]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod section;
mod structure;

pub use section::Section;
pub use structure::{SectionItemChanges, StructureChanges, diff_structure};
