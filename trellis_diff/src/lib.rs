// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Diff: keyed sequence diffing for animated list reloads.
//!
//! This crate provides a small, renderer-agnostic core for comparing two
//! ordered snapshots of identity-bearing elements and describing the change
//! between them as four disjoint operation lists. It is intended to be shared
//! across different UI stacks and list/grid implementations.
//!
//! The core concepts are:
//!
//! - [`Diffable`]: a trait describing an element with a stable key and a
//!   content-equality test.
//! - [`ChangeSet`]: deletions, insertions, moves, and updates produced by one
//!   diff invocation, with a [`ChangeKinds`] summary.
//! - [`diff`]: a pure function computing the [`ChangeSet`] between an old and
//!   a new snapshot using key matching plus order-preserving move detection.
//! - [`apply`]: a reference application of a [`ChangeSet`] to a plain slice,
//!   using the same atomic semantics a batching widget uses. Hosts without
//!   an animated batch facility can use it directly; it also anchors the
//!   crate's round-trip tests.
//!
//! This crate deliberately does **not** know about sections, index paths, or
//! any particular widget. Host frameworks are responsible for:
//!
//! - Snapshotting the old state before mutating their model.
//! - Translating the [`ChangeSet`] into whatever mutation commands their
//!   widget understands.
//! - Applying all of those commands as one atomic batch.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_diff::{Diffable, diff};
//!
//! #[derive(Clone)]
//! struct Row {
//!     id: u64,
//!     title: &'static str,
//! }
//!
//! impl Diffable for Row {
//!     type Key = u64;
//!
//!     fn diff_key(&self) -> u64 {
//!         self.id
//!     }
//!
//!     fn content_eq(&self, other: &Self) -> bool {
//!         self.title == other.title
//!     }
//! }
//!
//! let old = [Row { id: 1, title: "a" }, Row { id: 2, title: "b" }];
//! let new = [Row { id: 2, title: "b" }, Row { id: 3, title: "c" }];
//!
//! let changes = diff(&old, &new);
//! assert_eq!(changes.deletions, [0]); // row 1, by old index
//! assert_eq!(changes.insertions, [1]); // row 3, by new index
//! assert!(changes.moves.is_empty()); // row 2 kept its relative order
//! ```
//!
//! Keys must be unique within each snapshot; see [`Diffable`] for the
//! documented degradation when they are not.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod apply;
mod changeset;
mod diff;
mod diffable;

pub use apply::apply;
pub use changeset::{ChangeKinds, ChangeSet, Move, Update};
pub use diff::diff;
pub use diffable::Diffable;
